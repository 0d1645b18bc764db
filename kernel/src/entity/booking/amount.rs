use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Whole rupees charged for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalAmount(i64);

impl TotalAmount {
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The processor takes cents.
    pub fn in_minor_units(&self) -> error_stack::Result<i64, KernelError> {
        self.0.checked_mul(100).ok_or_else(|| {
            Report::new(KernelError::Invalid)
                .attach_printable(format!("{} cannot be charged in cents", self.0))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::KernelError;

    use super::TotalAmount;

    #[test]
    fn cents_refuse_to_overflow() {
        assert_eq!(TotalAmount::new(19_000).in_minor_units().unwrap(), 1_900_000);
        let err = TotalAmount::new(100_000_000_000_000_000)
            .in_minor_units()
            .unwrap_err();
        assert!(matches!(err.current_context(), KernelError::Invalid));
        assert!(TotalAmount::new(i64::MAX / 100 + 1).in_minor_units().is_err());
    }
}
