//! Adjacent scan shared by partner assignment and match pairing.

/// A pair formed by [`pair_in_order`]. `forced` means every candidate left had already met `first`.
pub(crate) struct GreedyPair<T> {
    pub first: T,
    pub second: T,
    pub forced: bool,
}

/// Walk `ordered` front to back. Each unpaired item takes the nearest later
/// unpaired item it has not met; if none is left, the nearest later one anyway.
/// An odd item out is returned separately.
pub(crate) fn pair_in_order<T, F>(ordered: Vec<T>, met_before: F) -> (Vec<GreedyPair<T>>, Option<T>)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let n = ordered.len();
    let mut taken = vec![false; n];
    let mut pairs = Vec::with_capacity(n / 2);
    let mut leftover = None;

    for i in 0..n {
        if taken[i] {
            continue;
        }
        taken[i] = true;
        let fresh = (i + 1..n).find(|&j| !taken[j] && !met_before(&ordered[i], &ordered[j]));
        let (j, forced) = match fresh {
            Some(j) => (j, false),
            None => match (i + 1..n).find(|&j| !taken[j]) {
                Some(j) => (j, true),
                None => {
                    leftover = Some(ordered[i].clone());
                    break;
                }
            },
        };
        taken[j] = true;
        pairs.push(GreedyPair {
            first: ordered[i].clone(),
            second: ordered[j].clone(),
            forced,
        });
    }

    (pairs, leftover)
}
