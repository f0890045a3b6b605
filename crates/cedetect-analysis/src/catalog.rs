//! The accepted signature catalog.
//!
//! Twelve shapes, frozen before any matching begins and never mutated
//! afterwards (safe for unrestricted concurrent reads). Inputs are
//! `event.Event` alone or `context.Context` plus `event.Event`; outputs are
//! nothing, a protocol result, an error, a mutated event pointer, or the
//! pointer paired with a result or error.

use once_cell::sync::Lazy;
use smallvec::smallvec;

use cedetect_core::types::{FunctionArg, FunctionSignature};

/// Import path of the CloudEvents SDK event package.
pub const CE_IMPORT: &str = "github.com/cloudevents/sdk-go/v2";
/// Import path of the CloudEvents protocol package.
pub const CE_PROTOCOL_IMPORT: &str = "github.com/cloudevents/sdk-go/v2/protocol";
/// Import path of the standard context package.
pub const CONTEXT_IMPORT: &str = "context";

fn event() -> FunctionArg {
    FunctionArg::imported(CE_IMPORT, "Event")
}

fn event_ptr() -> FunctionArg {
    FunctionArg::imported_ptr(CE_IMPORT, "Event")
}

fn ctx() -> FunctionArg {
    FunctionArg::imported(CONTEXT_IMPORT, "Context")
}

fn protocol_result() -> FunctionArg {
    FunctionArg::imported(CE_PROTOCOL_IMPORT, "Result")
}

fn go_error() -> FunctionArg {
    FunctionArg::builtin("error")
}

static CATALOG: Lazy<Vec<FunctionSignature>> = Lazy::new(|| {
    vec![
        // func(event.Event)
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![],
        },
        // func(event.Event) protocol.Result
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![protocol_result()],
        },
        // func(event.Event) error
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![go_error()],
        },
        // func(context.Context, event.Event)
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![],
        },
        // func(context.Context, event.Event) protocol.Result
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![protocol_result()],
        },
        // func(context.Context, event.Event) error
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![go_error()],
        },
        // func(event.Event) *event.Event
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![event_ptr()],
        },
        // func(event.Event) (*event.Event, protocol.Result)
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![event_ptr(), protocol_result()],
        },
        // func(event.Event) (*event.Event, error)
        FunctionSignature {
            ins: smallvec![event()],
            outs: smallvec![event_ptr(), go_error()],
        },
        // func(context.Context, event.Event) *event.Event
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![event_ptr()],
        },
        // func(context.Context, event.Event) (*event.Event, protocol.Result)
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![event_ptr(), protocol_result()],
        },
        // func(context.Context, event.Event) (*event.Event, error)
        FunctionSignature {
            ins: smallvec![ctx(), event()],
            outs: smallvec![event_ptr(), go_error()],
        },
    ]
});

/// The process-wide catalog of accepted entry-point signatures.
pub fn accepted_signatures() -> &'static [FunctionSignature] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_twelve_entries() {
        assert_eq!(accepted_signatures().len(), 12);
    }

    #[test]
    fn entries_are_unique() {
        let catalog = accepted_signatures();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_entry_consumes_the_event() {
        for sig in accepted_signatures() {
            assert!(
                sig.ins.contains(&event()),
                "{sig} does not take event.Event"
            );
            assert!(sig.ins.len() <= 2 && sig.outs.len() <= 2);
        }
    }

    #[test]
    fn context_is_always_the_first_parameter() {
        for sig in accepted_signatures() {
            if sig.ins.contains(&ctx()) {
                assert_eq!(sig.ins[0], ctx());
                assert_eq!(sig.ins.len(), 2);
            }
        }
    }
}
