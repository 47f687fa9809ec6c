use tracing::trace;

use crate::engine::ops::{OpKind, Operation};
use crate::engine::{Args, Figure, PlotError};

/// One entry of a call script: an engine operation plus the arguments it was
/// last invoked with.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    op: &'static Operation,
    args: Option<Args>,
}

impl RecordedCall {
    pub(crate) fn new(op: &'static Operation) -> Self {
        Self { op, args: None }
    }

    pub fn name(&self) -> &'static str {
        self.op.name
    }

    pub fn kind(&self) -> OpKind {
        self.op.kind
    }

    /// Arguments of the latest invocation, `None` until first called.
    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }

    pub fn is_invoked(&self) -> bool {
        self.args.is_some()
    }

    /// Record `args`, replacing whatever the previous invocation stored.
    pub fn call(&mut self, args: Args) -> &mut Self {
        self.args = Some(args);
        self
    }

    pub(crate) fn replay(&self, figure: &mut Figure) -> Result<(), PlotError> {
        match &self.args {
            Some(args) => {
                trace!(op = self.op.name, "replaying");
                self.op.apply(figure, args)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ops::lookup;

    #[test]
    fn uninvoked_call_is_skipped() {
        let call = RecordedCall::new(lookup("title").unwrap());
        let mut fig = Figure::new();
        call.replay(&mut fig).unwrap();
        assert_eq!(fig, Figure::new());
    }

    #[test]
    fn last_invocation_wins() {
        let mut call = RecordedCall::new(lookup("title").unwrap());
        call.call(Args::new().arg("a")).call(Args::new().arg("b"));
        let mut fig = Figure::new();
        call.replay(&mut fig).unwrap();
        assert_eq!(fig.title.as_deref(), Some("b"));
    }
}
