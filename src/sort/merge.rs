//! Natural merge sort for singly-linked chains.
//!
//! Works purely by relinking successor links through [`Splice`]: no node is allocated and, apart
//! from moving the minimum into the first node once, no payload is moved. Bookkeeping is four
//! head/tail pairs, two output chains being filled and two input chains being drained.
//!
//! The first pass distributes the range over the two outputs, extending the current output as long
//! as the input keeps ascending, and finds the minimum on the way. Every following round merges
//! the two chains back into two outputs, switching output whenever the merged sequence would have
//! to descend. Each output run swallows at least one whole run of every input, so the number of
//! runs at least halves per round, and a round that never switches leaves one sorted chain.
//!
//! Equal elements usually keep their order, but the minimum exchange and run switching make no
//! stability promise.

use core::mem;

use crate::list::{NodeId, Splice};

#[derive(Copy, Clone, Default)]
struct Chain {
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl Chain {
    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// The working chains of one sort call.
///
/// Dropping it splices every chain back between `first` and `last`, on a normal exit as well as
/// when the comparison panics. Every step compares first and relinks afterwards, so at any unwind
/// point each node is either still in the pending rest or in exactly one chain.
struct WorkingLists<'a, S: Splice> {
    list: &'a mut S,
    first: NodeId,
    last: Option<NodeId>,
    outputs: [Chain; 2],
    inputs: [Chain; 2],
    primary: usize,
}

impl<S: Splice> WorkingLists<'_, S> {
    #[inline]
    fn append(&mut self, node: NodeId) {
        let chain = &mut self.outputs[self.primary];
        match chain.tail {
            Some(tail) => self.list.link(tail, Some(node)),
            None => chain.head = Some(node),
        }
        chain.tail = Some(node);
    }

    /// Removes the front node of a non-empty input.
    #[inline]
    fn take_front(&mut self, input: usize) -> NodeId {
        let chain = &mut self.inputs[input];
        let Some(head) = chain.head else {
            unreachable!("take_front on an empty input");
        };

        // The link behind a tail is stale, never follow it.
        if chain.tail == Some(head) {
            *chain = Chain::default();
        } else {
            chain.head = self.list.successor(head);
        }

        head
    }

    #[inline]
    fn is_less_node<F>(&self, is_less: &mut F, a: NodeId, b: NodeId) -> bool
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        is_less(self.list.payload(a), self.list.payload(b))
    }

    /// Whether appending `node` behind `prev` keeps the output ascending.
    #[inline]
    fn extends_run<F>(&self, is_less: &mut F, node: NodeId, prev: Option<NodeId>) -> bool
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        match prev {
            Some(prev) => !self.is_less_node(is_less, node, prev),
            None => true,
        }
    }

    /// Detaches every node behind `first` into the two outputs.
    ///
    /// Returns the node holding the minimum and the number of detached nodes.
    fn split_runs<F>(&mut self, is_less: &mut F) -> (NodeId, usize)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        let mut min = self.first;
        let mut count = 0;

        while let Some(node) = self.list.successor(self.first) {
            if Some(node) == self.last {
                break;
            }

            if let Some(tail) = self.outputs[self.primary].tail {
                if self.is_less_node(is_less, node, tail) {
                    self.primary ^= 1;
                }
            }
            if self.is_less_node(is_less, node, min) {
                min = node;
            }

            let rest = self.list.successor(node);
            self.list.link(self.first, rest);
            self.append(node);
            count += 1;
        }

        (min, count)
    }

    /// Merges the outputs until a round leaves a single ascending chain.
    ///
    /// With `displaced` set, at least one round runs even if the split produced a single chain.
    fn merge_rounds<F>(&mut self, count: usize, mut displaced: bool, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        // A consistent order needs about log2(count) rounds. Anything beyond this bound means
        // `is_less` is not a strict weak order, give up and keep the elements as they are.
        let max_rounds = 2 * (usize::BITS - count.leading_zeros()) as usize + 4;

        let mut rounds = 0;
        while displaced || (!self.outputs[0].is_empty() && !self.outputs[1].is_empty()) {
            if rounds == max_rounds {
                break;
            }
            rounds += 1;
            displaced = false;

            self.inputs = mem::take(&mut self.outputs);
            self.primary = 0;

            let mut last_merged: Option<NodeId> = None;
            loop {
                let (input, switch) = match (self.inputs[0].head, self.inputs[1].head) {
                    (None, None) => break,
                    (Some(a), None) => (0, !self.extends_run(is_less, a, last_merged)),
                    (None, Some(b)) => (1, !self.extends_run(is_less, b, last_merged)),
                    (Some(a), Some(b)) => {
                        let fits_a = self.extends_run(is_less, a, last_merged);
                        let fits_b = self.extends_run(is_less, b, last_merged);
                        match (fits_a, fits_b) {
                            (true, false) => (0, false),
                            (false, true) => (1, false),
                            // Ties go to the first input.
                            (both_fit, _) => {
                                let input = self.is_less_node(is_less, b, a) as usize;
                                (input, !both_fit)
                            }
                        }
                    }
                };

                if switch {
                    self.primary ^= 1;
                }

                let node = self.take_front(input);
                self.append(node);
                last_merged = Some(node);
            }
        }
    }
}

impl<S: Splice> Drop for WorkingLists<'_, S> {
    fn drop(&mut self) {
        // Whatever was not detached yet still runs from `first` up to `last`.
        let pending = self.list.successor(self.first);

        let chains = [
            self.outputs[self.primary],
            self.outputs[self.primary ^ 1],
            self.inputs[0],
            self.inputs[1],
        ];

        let mut tail = self.first;
        for chain in chains {
            if let (Some(head), Some(chain_tail)) = (chain.head, chain.tail) {
                self.list.link(tail, Some(head));
                tail = chain_tail;
            }
        }
        self.list.link(tail, pending);

        if pending.is_none() {
            self.list.relink_back(tail);
        }
    }
}

/// Sorts the chain `[first, last)` of `list` in place.
///
/// `first` keeps its identity and ends up holding the minimum, the sorted rest is linked behind it
/// and the chain still ends at `last`. Already ascending input costs at most `2 * (n - 1)`
/// comparisons.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort<S, F>(list: &mut S, first: NodeId, last: Option<NodeId>, is_less: &mut F)
where
    S: Splice,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if Some(first) == last || list.successor(first) == last {
        return;
    }

    let mut work = WorkingLists {
        list,
        first,
        last,
        outputs: Default::default(),
        inputs: Default::default(),
        primary: 0,
    };

    let (min, count) = work.split_runs(is_less);
    // The payload of `first` takes the place of the minimum and can break that run.
    let displaced = min != first;
    if displaced {
        work.list.swap_payloads(first, min);
    }
    work.merge_rounds(count, displaced, is_less);
}
