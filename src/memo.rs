//! Memoized views: re-evaluate a view function only when its props changed.
//!
//! Whether props "changed" is decided by a [`PropsComparison`] policy chosen per view:
//! - [`AlwaysRender`]: every call re-evaluates (a plain component).
//! - [`PartialEqProps`]: re-evaluate when `prev != next` (a pure component).
//! - [`FnComparison`]: any custom `Fn(&P, &P) -> bool` (true means "unchanged").

/// Decides whether a view can reuse its previous output.
pub trait PropsComparison<P: ?Sized> {
    /// Return `true` if `next` renders the same as `prev`, i.e. the view may be skipped.
    fn props_equal(&self, prev: &P, next: &P) -> bool;
}

/// Never skip.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysRender;

impl<P: ?Sized> PropsComparison<P> for AlwaysRender {
    fn props_equal(&self, _prev: &P, _next: &P) -> bool {
        false
    }
}

/// Skip when the props compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialEqProps;

impl<P: PartialEq + ?Sized> PropsComparison<P> for PartialEqProps {
    fn props_equal(&self, prev: &P, next: &P) -> bool {
        prev == next
    }
}

/// Convenience policy: build a [`PropsComparison`] from a closure.
#[derive(Clone, Copy)]
pub struct FnComparison<F> {
    pub equal: F,
}

impl<F> FnComparison<F> {
    pub fn new(equal: F) -> Self {
        Self { equal }
    }
}

impl<F> std::fmt::Debug for FnComparison<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComparison").finish_non_exhaustive()
    }
}

impl<P: ?Sized, F> PropsComparison<P> for FnComparison<F>
where
    F: Fn(&P, &P) -> bool,
{
    fn props_equal(&self, prev: &P, next: &P) -> bool {
        (self.equal)(prev, next)
    }
}

/// A view whose output is cached together with the props it was computed from.
#[derive(Debug)]
pub struct MemoView<P, O, C = PartialEqProps> {
    policy: C,
    last: Option<(P, O)>,
    render_count: u64,
}

impl<P, O, C: Default> Default for MemoView<P, O, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<P, O, C> MemoView<P, O, C> {
    pub fn new(policy: C) -> Self {
        Self {
            policy,
            last: None,
            render_count: 0,
        }
    }

    pub fn policy(&self) -> &C {
        &self.policy
    }

    /// How many times the view function actually ran.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn last_output(&self) -> Option<&O> {
        self.last.as_ref().map(|(_, output)| output)
    }

    /// Props of the last evaluation.
    pub fn last_props(&self) -> Option<&P> {
        self.last.as_ref().map(|(props, _)| props)
    }

    /// Force the next [`Self::show`] to re-evaluate.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl<P, O, C: PropsComparison<P>> MemoView<P, O, C> {
    /// Return the view output for `props`, running `view` only if the policy reports a change
    /// against the props of the last evaluation.
    pub fn show(&mut self, props: P, view: impl FnOnce(&P) -> O) -> &O {
        let entry = match self.last.take() {
            Some((prev, output)) if self.policy.props_equal(&prev, &props) => (prev, output),
            _ => {
                self.render_count += 1;
                let output = view(&props);
                (props, output)
            }
        };
        &self.last.insert(entry).1
    }

    /// Like [`Self::show`] but only reports whether `view` ran.
    pub fn update(&mut self, props: P, view: impl FnOnce(&P) -> O) -> bool {
        let before = self.render_count;
        self.show(props, view);
        self.render_count != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_render_runs_every_time() {
        let mut view: MemoView<u32, u32, AlwaysRender> = MemoView::default();
        assert_eq!(*view.show(1, |p| p * 10), 10);
        assert_eq!(*view.show(1, |p| p * 10), 10);
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn partial_eq_skips_equal_props() {
        let mut view: MemoView<&str, String> = MemoView::default();
        assert!(view.update("a", |p| p.to_uppercase()));
        assert!(!view.update("a", |_| unreachable!("equal props must be skipped")));
        assert!(view.update("b", |p| p.to_uppercase()));
        assert_eq!(view.last_output().map(String::as_str), Some("B"));
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn custom_comparison_sees_last_evaluated_props() {
        // Only re-render when the length changes.
        let mut view = MemoView::new(FnComparison::new(|a: &Vec<i32>, b: &Vec<i32>| {
            a.len() == b.len()
        }));
        view.show(vec![1, 2], |p| p.iter().sum::<i32>());
        assert_eq!(*view.show(vec![5, 5], |p| p.iter().sum::<i32>()), 3);
        assert_eq!(view.last_props(), Some(&vec![1, 2]));
        assert_eq!(*view.show(vec![1, 1, 1], |p| p.iter().sum::<i32>()), 3);
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn invalidate_forces_evaluation() {
        let mut view: MemoView<u8, u8> = MemoView::default();
        view.show(1, |p| *p);
        view.invalidate();
        assert!(view.last_output().is_none());
        assert!(view.update(1, |p| *p));
        assert_eq!(view.render_count(), 2);
    }
}
