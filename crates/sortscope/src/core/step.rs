//! Suspendable step sequences
//!
//! Every sorting algorithm is written as an explicit state machine that
//! implements [`StepSequence`]. Calling [`StepSequence::resume`] runs the
//! machine up to its next pause point and returns [`Step::Yielded`], leaving
//! all loop counters and recursion state stored in the machine itself. When
//! the work is finished the machine returns [`Step::Done`] with its result.
//!
//! Machines that need to mutate shared state (the snapshot being sorted)
//! receive it as the `cx` argument on every resume instead of owning it, so a
//! parent and all of its recursive children can work on one list.
//!
//! # Delegation
//!
//! A parent keeps its child machine inside its own state enum and forwards
//! each resume to it with [`delegate!`](crate::delegate). Child pauses bubble
//! straight out to the caller; the child's final value comes back to the
//! parent as the value of the macro expression:
//!
//! ```rust
//! use sortscope::core::{Step, StepSequence};
//! use sortscope::delegate;
//!
//! /// Counts down, pausing once per number, then returns how many it paused.
//! struct Countdown(u32, u32);
//!
//! impl StepSequence<Vec<u32>> for Countdown {
//!     type Yield = ();
//!     type Output = u32;
//!
//!     fn resume(&mut self, seen: &mut Vec<u32>) -> Step<(), u32> {
//!         if self.0 == 0 {
//!             return Step::Done(self.1);
//!         }
//!         seen.push(self.0);
//!         self.0 -= 1;
//!         self.1 += 1;
//!         Step::Yielded(())
//!     }
//! }
//!
//! /// Runs a countdown as a child, then pauses once more with the total.
//! struct Parent {
//!     child: Countdown,
//!     total: Option<u32>,
//! }
//!
//! impl StepSequence<Vec<u32>> for Parent {
//!     type Yield = ();
//!     type Output = ();
//!
//!     fn resume(&mut self, seen: &mut Vec<u32>) -> Step<(), ()> {
//!         if self.total.is_none() {
//!             let total = delegate!(self.child, seen);
//!             seen.push(100 + total);
//!             self.total = Some(total);
//!             return Step::Yielded(());
//!         }
//!         Step::Done(())
//!     }
//! }
//!
//! let mut parent = Parent { child: Countdown(2, 0), total: None };
//! let mut seen = Vec::new();
//! while parent.resume(&mut seen).is_yielded() {}
//! assert_eq!(seen, vec![2, 1, 102]);
//! ```

/// Outcome of advancing a step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, R> {
    /// The sequence paused at a yield point
    Yielded(Y),
    /// The sequence has run to completion
    Done(R),
}

impl<Y, R> Step<Y, R> {
    /// Returns true if the sequence paused
    pub fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns true if the sequence completed
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// The yielded value, if the sequence paused
    pub fn yielded(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Done(_) => None,
        }
    }

    /// The final value, if the sequence completed
    pub fn done(self) -> Option<R> {
        match self {
            Step::Yielded(_) => None,
            Step::Done(r) => Some(r),
        }
    }

    /// Transform the yielded value, leaving completion untouched
    pub fn map_yield<Z>(self, f: impl FnOnce(Y) -> Z) -> Step<Z, R> {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Done(r) => Step::Done(r),
        }
    }

    /// Transform the final value, leaving pauses untouched
    pub fn map_done<S>(self, f: impl FnOnce(R) -> S) -> Step<Y, S> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Done(r) => Step::Done(f(r)),
        }
    }
}

/// A cooperatively suspended computation
///
/// `resume` takes `&mut self`, so a sequence can never be advanced from two
/// places at once. Abandoning a paused sequence is always safe: dropping it
/// releases everything it holds.
///
/// Internal sequences are resumed until they report [`Step::Done`] and then
/// dropped by their parent. Driver-facing wrappers (see
/// [`Sorter`](crate::algorithms::Sorter)) keep returning `Done` after
/// completion.
pub trait StepSequence<Cx: ?Sized = ()> {
    /// Value handed out at every pause
    type Yield;
    /// Value handed back on completion
    type Output;

    /// Run to the next pause point or to completion
    fn resume(&mut self, cx: &mut Cx) -> Step<Self::Yield, Self::Output>;
}

impl<Cx: ?Sized, S: StepSequence<Cx> + ?Sized> StepSequence<Cx> for Box<S> {
    type Yield = S::Yield;
    type Output = S::Output;

    fn resume(&mut self, cx: &mut Cx) -> Step<Self::Yield, Self::Output> {
        (**self).resume(cx)
    }
}

/// Forward one resume to a child sequence
///
/// If the child pauses, the enclosing `resume` returns the same pause to its
/// caller. If the child completes, the macro evaluates to the child's output.
/// The enclosing function must return `Step<Y, _>` with the child's `Y`.
#[macro_export]
macro_rules! delegate {
    ($child:expr, $cx:expr) => {
        match $crate::core::StepSequence::resume(&mut $child, $cx) {
            $crate::core::Step::Yielded(y) => return $crate::core::Step::Yielded(y),
            $crate::core::Step::Done(output) => output,
        }
    };
}

/// Run a sequence to completion, calling `on_yield` at every pause
///
/// Returns the final output and the number of pauses observed.
pub fn drive<Cx, S>(
    sequence: &mut S,
    cx: &mut Cx,
    mut on_yield: impl FnMut(&Cx, S::Yield),
) -> (S::Output, usize)
where
    Cx: ?Sized,
    S: StepSequence<Cx> + ?Sized,
{
    let mut pauses = 0;
    loop {
        match sequence.resume(cx) {
            Step::Yielded(y) => {
                pauses += 1;
                on_yield(cx, y);
            }
            Step::Done(output) => return (output, pauses),
        }
    }
}
