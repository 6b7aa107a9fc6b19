/// Actions an observer can take during an SQP run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this trial point as unacceptable.
    ///
    /// The line search backtracks as if the merit function had not decreased.
    /// The evaluation (if successful) is not considered for the best solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors at a trial point when a
    ///   shorter step is likely to stay in the valid domain.
    /// - Steering the search away from a region even when evaluation succeeded.
    ///
    /// Only trial points of the line search can be rejected. Returned for any
    /// other event, it is treated like no action at all.
    AssumeWorse,
}
