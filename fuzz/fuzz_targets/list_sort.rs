#![no_main]

use libfuzzer_sys::fuzz_target;
use litestl::List;

// The first byte picks how many nodes stay outside the sorted range on each side.
fuzz_target!(|data: &[u8]| {
    let Some((&frame, values)) = data.split_first() else {
        return;
    };
    let frame = usize::from(frame % 4).min(values.len() / 2);

    let mut list: List<u8> = values.iter().copied().collect();
    let first = list.position(frame);
    let last = list.position(values.len() - frame);
    litestl::sort(list.range_mut(first, last));

    let mut expected = values.to_vec();
    expected[frame..values.len() - frame].sort_unstable();
    let sorted: Vec<u8> = list.iter().copied().collect();
    assert_eq!(sorted, expected);
    assert_eq!(list.len(), values.len());
});
