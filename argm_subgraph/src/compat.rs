//! Semantic compatibility of node and edge attributes.

use argm_common::AttrPolicy;

/// Decides whether attributes of the pattern may be matched to attributes of
/// the target. Structure is checked separately by the state.
pub trait AttrCompat<N, E> {
    /// Whether a pattern node attribute may map to a target node attribute.
    fn nodes(&self, pattern: &N, target: &N) -> bool;

    /// Whether a pattern edge attribute may map to a target edge attribute.
    fn edges(&self, pattern: &E, target: &E) -> bool;
}

/// Structure only.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreAttrs;

impl<N, E> AttrCompat<N, E> for IgnoreAttrs {
    #[inline]
    fn nodes(&self, _: &N, _: &N) -> bool {
        true
    }

    #[inline]
    fn edges(&self, _: &E, _: &E) -> bool {
        true
    }
}

/// Attributes must compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactAttrs;

impl<N: PartialEq, E: PartialEq> AttrCompat<N, E> for ExactAttrs {
    #[inline]
    fn nodes(&self, pattern: &N, target: &N) -> bool {
        pattern == target
    }

    #[inline]
    fn edges(&self, pattern: &E, target: &E) -> bool {
        pattern == target
    }
}

/// Runtime choice between [`IgnoreAttrs`] and [`ExactAttrs`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PolicyAttrs(pub AttrPolicy);

impl<N: PartialEq, E: PartialEq> AttrCompat<N, E> for PolicyAttrs {
    #[inline]
    fn nodes(&self, pattern: &N, target: &N) -> bool {
        match self.0 {
            AttrPolicy::Ignore => true,
            AttrPolicy::Exact => pattern == target,
        }
    }

    #[inline]
    fn edges(&self, pattern: &E, target: &E) -> bool {
        match self.0 {
            AttrPolicy::Ignore => true,
            AttrPolicy::Exact => pattern == target,
        }
    }
}

/// A pair of closures: node predicate, then edge predicate.
impl<N, E, NF, EF> AttrCompat<N, E> for (NF, EF)
where
    NF: Fn(&N, &N) -> bool,
    EF: Fn(&E, &E) -> bool,
{
    #[inline]
    fn nodes(&self, pattern: &N, target: &N) -> bool {
        (self.0)(pattern, target)
    }

    #[inline]
    fn edges(&self, pattern: &E, target: &E) -> bool {
        (self.1)(pattern, target)
    }
}
