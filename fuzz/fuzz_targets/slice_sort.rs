#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    litestl::sort(v.as_mut_slice());

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(v, expected);
});
