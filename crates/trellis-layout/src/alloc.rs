#![forbid(unsafe_code)]

//! Budget allocation across a list of size preferences.

use crate::size::Size;

/// Cross-axis allocation: each child is measured independently.
///
/// `Fixed(n)` receives `min(n, budget)`, `Bounded(_, max)` receives
/// `min(max, budget)`, `Unbounded` receives the full budget. There is no
/// cross-child interaction; this is used on the axis where children are
/// stacked on top of each other rather than laid end-to-end.
pub fn alloc_max(budget: u16, prefs: &[Size]) -> Vec<u16> {
    prefs
        .iter()
        .map(|&pref| match pref {
            Size::Fixed(n) => n.min(budget),
            Size::Bounded(_, max) => max.min(budget),
            Size::Unbounded => budget,
        })
        .collect()
}

/// Main-axis allocation: children partition one shared budget.
///
/// Three phases:
///
/// 1. Left to right, every child takes its minimum demand (`Fixed(n)` takes
///    `n`, `Bounded(min, _)` takes `min`) clamped to what is still left, so
///    earlier children are satisfied first when the budget is short.
///    `Bounded` and `Unbounded` children are recorded as flexible.
/// 2. The remainder is split evenly across the flexible children. A
///    `Bounded` child whose total would pass its maximum is capped there and
///    the excess carried over.
/// 3. The division remainder plus the carry is handed out from the *last*
///    flexible child backward: `Unbounded` absorbs everything, `Bounded`
///    takes up to its remaining headroom. Surplus therefore favors the
///    rightmost flexible children, the opposite bias from phase 1.
///
/// The returned values never sum to more than `budget`.
pub fn alloc_fair(budget: u16, prefs: &[Size]) -> Vec<u16> {
    let mut extents = vec![0u16; prefs.len()];
    let mut remaining = budget;
    let mut flexible: Vec<usize> = Vec::new();

    for (i, &pref) in prefs.iter().enumerate() {
        match pref {
            Size::Fixed(n) => {
                let take = n.min(remaining);
                extents[i] = take;
                remaining -= take;
            }
            Size::Bounded(min, _) => {
                let take = min.min(remaining);
                extents[i] = take;
                remaining -= take;
                flexible.push(i);
            }
            Size::Unbounded => flexible.push(i),
        }
    }

    let slots = flexible.len().max(1) as u32;
    let share = (remaining as u32 / slots) as u16;
    let mut carry = (remaining as u32 % slots) as u16;

    for &i in &flexible {
        match prefs[i] {
            Size::Unbounded => extents[i] = extents[i].saturating_add(share),
            Size::Bounded(_, max) => {
                let total = extents[i].saturating_add(share);
                if total > max {
                    carry = carry.saturating_add(total - max);
                    extents[i] = max;
                } else {
                    extents[i] = total;
                }
            }
            Size::Fixed(_) => {}
        }
    }

    for &i in flexible.iter().rev() {
        if carry == 0 {
            break;
        }
        match prefs[i] {
            Size::Unbounded => {
                extents[i] = extents[i].saturating_add(carry);
                carry = 0;
            }
            Size::Bounded(_, max) => {
                let total = extents[i].saturating_add(carry);
                if total > max {
                    carry = total - max;
                    extents[i] = max;
                } else {
                    extents[i] = total;
                    carry = 0;
                }
            }
            Size::Fixed(_) => {}
        }
    }

    extents
}
