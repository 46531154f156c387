/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// The heap is implicit: the parent of `i` is `(i - 1) / 2`, its children are `2i + 1` and
/// `2i + 2`. Elements are only ever exchanged with [`slice::swap`], so if `is_less` panics the
/// slice still holds every original element, in unspecified order.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // This binary heap respects the invariant `parent >= child`.
    let mut sift_down = |v: &mut [T], mut node| loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Pick the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        if !is_less(&v[node], &v[child]) {
            break;
        }

        v.swap(node, child);
        node = child;
    };

    // Heapify bottom-up, starting at the last parent.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i);
    }

    // Move the maximum behind the shrinking heap, one at a time.
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    }
}
