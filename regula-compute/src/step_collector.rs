/// A type that can collect the steps applied by the rewrite engine while reducing an
/// expression.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when the caller
/// only wants the reduced result and does not care which rules fired.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    fn push(&mut self, _step: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
