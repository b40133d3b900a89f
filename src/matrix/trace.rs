use crate::matrix::matrix::{Element, Matrix};

/// Append-only history of a working matrix.
///
/// The log is created from the initial state, so it is never empty, and it
/// only ever stores deep copies: mutating the working matrix after `record`
/// leaves earlier steps untouched.
#[derive(Debug)]
pub struct StepLog<T> {
    steps: Vec<Matrix<T>>,
}

impl<T: Element> StepLog<T> {
    pub fn start(initial: &Matrix<T>) -> Self {
        StepLog {
            steps: vec![initial.snapshot()],
        }
    }

    pub fn record(&mut self, state: &Matrix<T>) {
        log::trace!("step {}: {:?}", self.steps.len(), state.to_list());
        self.steps.push(state.snapshot());
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn finish<R>(self, result: R) -> Traced<T, R> {
        Traced {
            steps: self.steps,
            result,
        }
    }
}

/// Output of one engine call: every recorded step plus the final result.
#[derive(Debug, Clone, PartialEq)]
pub struct Traced<T, R> {
    pub steps: Vec<Matrix<T>>,
    pub result: R,
}

impl<T, R> Traced<T, R> {
    pub fn step(&self, index: usize) -> Option<&Matrix<T>> {
        self.steps.get(index)
    }

    /// Last recorded state, the one the result was read from.
    pub fn final_state(&self) -> &Matrix<T> {
        &self.steps[self.steps.len() - 1]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
