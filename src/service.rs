//! Orchestration shared by the CLI and HTTP front-ends: compute, then log.
//!
//! Both adapters translate their input into an [`OperationRequest`] and call
//! [`MathService::execute`]. A domain error aborts before any log write; a
//! log failure never masks the computed value — it travels alongside it in
//! the [`Outcome`].

use num_bigint::BigInt;
use tracing::warn;

use crate::engine::{self, EngineError, Operation};
use crate::ledger::{LedgerError, OpLogStore};

/// A type-validated invocation of one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationRequest {
    Power { base: i64, exponent: i64 },
    Fibonacci { n: i64 },
    Factorial { n: i64 },
}

impl OperationRequest {
    pub fn operation(&self) -> Operation {
        match self {
            OperationRequest::Power { .. } => Operation::Power,
            OperationRequest::Fibonacci { .. } => Operation::Fibonacci,
            OperationRequest::Factorial { .. } => Operation::Factorial,
        }
    }

    /// Textual argument encoding persisted in the operation log.
    fn input_encoding(&self) -> String {
        match self {
            OperationRequest::Power { base, exponent } => {
                format!("base={base},exponent={exponent}")
            }
            OperationRequest::Fibonacci { n } | OperationRequest::Factorial { n } => {
                format!("n={n}")
            }
        }
    }

    fn compute(&self) -> Result<BigInt, EngineError> {
        match *self {
            OperationRequest::Power { base, exponent } => engine::power(base, exponent),
            OperationRequest::Fibonacci { n } => engine::fibonacci(n),
            OperationRequest::Factorial { n } => engine::factorial(n),
        }
    }
}

/// Result of a successful computation plus the outcome of logging it.
#[derive(Debug)]
pub struct Outcome {
    pub operation: Operation,
    /// Decimal encoding of the computed value; a string so arbitrary
    /// precision survives every boundary.
    pub value: String,
    /// Assigned record id, or the logging failure. Independent of the
    /// computation's success by construction.
    pub log: Result<u64, LedgerError>,
}

#[derive(Clone)]
pub struct MathService {
    store: OpLogStore,
}

impl MathService {
    pub fn new(store: OpLogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &OpLogStore {
        &self.store
    }

    /// Compute the requested operation and append it to the operation log.
    ///
    /// A domain error returns early; nothing is logged for a failed
    /// computation. A logging failure is reported in [`Outcome::log`] while
    /// the computed value is still returned.
    pub fn execute(&self, request: OperationRequest) -> Result<Outcome, EngineError> {
        let operation = request.operation();
        let value = request.compute()?.to_string();

        let log = self
            .store
            .append(operation, request.input_encoding(), value.clone());
        if let Err(err) = &log {
            warn!(%operation, error = %err, "Operation computed but not logged");
        }

        Ok(Outcome {
            operation,
            value,
            log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_service() -> (MathService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = OpLogStore::open(temp_dir.path().join("oplog")).unwrap();
        store.initialize().unwrap();
        (MathService::new(store), temp_dir)
    }

    #[test]
    fn execute_computes_and_logs() {
        let (service, _temp) = create_test_service();

        let outcome = service
            .execute(OperationRequest::Power {
                base: 2,
                exponent: 10,
            })
            .unwrap();

        assert_eq!(outcome.value, "1024");
        let id = outcome.log.unwrap();

        let record = service.store().get(id).unwrap().unwrap();
        assert_eq!(record.operation, Operation::Power);
        assert_eq!(record.input, "base=2,exponent=10");
        assert_eq!(record.result, "1024");
    }

    #[test]
    fn domain_error_writes_no_record() {
        let (service, _temp) = create_test_service();

        let err = service
            .execute(OperationRequest::Fibonacci { n: -1 })
            .unwrap_err();
        assert_eq!(err, EngineError::NegativeArgument(-1));

        assert!(service.store().is_empty().unwrap());
    }

    #[test]
    fn logging_failure_still_returns_value() {
        // An uninitialized store is the simplest unavailable medium.
        let temp_dir = TempDir::new().unwrap();
        let store = OpLogStore::open(temp_dir.path().join("oplog")).unwrap();
        let service = MathService::new(store);

        let outcome = service
            .execute(OperationRequest::Factorial { n: 5 })
            .unwrap();

        assert_eq!(outcome.value, "120");
        assert!(matches!(outcome.log, Err(LedgerError::NotInitialized)));
    }

    #[test]
    fn consecutive_executions_get_increasing_ids() {
        let (service, _temp) = create_test_service();

        let first = service
            .execute(OperationRequest::Fibonacci { n: 10 })
            .unwrap()
            .log
            .unwrap();
        let second = service
            .execute(OperationRequest::Factorial { n: 5 })
            .unwrap()
            .log
            .unwrap();

        assert!(second > first);
        assert_eq!(service.store().len().unwrap(), 2);
    }
}
