//! Type-erased transition actions.

use super::callable::{ActionFn, Destination};
use crate::containers::Kind;
use crate::variant::{Alternative, Alternatives, VariantAccessError};

type ErasedAction<SV, EV> =
    Box<dyn Fn(&mut SV, &mut EV) -> Result<Option<SV>, VariantAccessError> + Send + Sync>;

/// The effect of a transition, erased over the state and event sets.
///
/// Invoking it yields the wrapped destination state for external
/// transitions and `None` for internal ones.
pub struct Action<SV, EV> {
    call: ErasedAction<SV, EV>,
    pass: bool,
}

impl<SV: Alternatives, EV: Alternatives> Action<SV, EV> {
    /// Erase `action`, declared over source `S`, event `E` and destination `D`.
    pub fn new<S, E, D, A, M>(action: A) -> Self
    where
        S: Alternative<SV>,
        E: Alternative<EV>,
        D: Destination<SV>,
        A: ActionFn<S, E, D::Output, M>,
        M: 'static,
    {
        Action {
            call: Box::new(move |source: &mut SV, event: &mut EV| {
                let found_source = source.kind();
                let found_event = event.kind();
                let source = S::peek_mut(source).ok_or(VariantAccessError::Mismatch {
                    expected: Kind::of::<S>(),
                    found: found_source,
                })?;
                let event = E::peek_mut(event).ok_or(VariantAccessError::Mismatch {
                    expected: Kind::of::<E>(),
                    found: found_event,
                })?;
                Ok(D::commit(action.call(source, event)))
            }),
            pass: A::PASS,
        }
    }

    /// Run the action against the live state and event.
    pub fn invoke(&self, source: &mut SV, event: &mut EV) -> Result<Option<SV>, VariantAccessError> {
        (self.call)(source, event)
    }
}

impl<SV, EV> Action<SV, EV> {
    /// Whether this action was declared with the placeholder.
    pub fn is_pass(&self) -> bool {
        self.pass
    }
}
