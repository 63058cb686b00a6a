use crate::cleanup::CleanupFailure;

/// Where a guard sends cleanup failures, since they cannot be returned from a destructor.
pub trait Report {
    fn report(&self, failure: &CleanupFailure);
}
impl<F> Report for F
where
    F: Fn(&CleanupFailure),
{
    fn report(&self, failure: &CleanupFailure) {
        self(failure)
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Emit failures through [log::error].
pub struct Log;
impl Report for Log {
    fn report(&self, failure: &CleanupFailure) {
        log::error!("{}, resources may have leaked", failure);
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Discard failures.
pub struct Ignore;
impl Report for Ignore {
    fn report(&self, _: &CleanupFailure) {}
}

#[cfg(test)]
mod tests {
    use {super::*, std::cell::RefCell};

    #[test]
    fn closure() {
        let failures = RefCell::new(Vec::new());
        let report = |failure: &CleanupFailure| failures.borrow_mut().push(failure.clone());

        report.report(&CleanupFailure::Error("closed twice".to_owned()));
        Ignore.report(&CleanupFailure::Error("ignored".to_owned()));
        Log.report(&CleanupFailure::Panic("logged".to_owned()));

        assert_eq!(
            failures.into_inner(),
            [CleanupFailure::Error("closed twice".to_owned())]
        );
    }
}
