use crate::core::fleet::Fleet;
use crate::utils::error::{BoatyardError, Result};

/// Adds one month of charges to every vessel in the fleet. There is no
/// idempotence guard: each invocation bills a full month, so calling this
/// twice charges twice.
pub fn apply_monthly_charges(fleet: &mut Fleet) {
    for vessel in fleet.vessels_mut() {
        let charge = vessel.monthly_charge();
        vessel.outstanding_fees += charge;
    }
    tracing::debug!("applied monthly charges to {} vessels", fleet.len());
}

/// Records a payment against a vessel's balance. A payment equal to or
/// above the balance is rejected outright; partial payments only.
pub fn record_payment(fleet: &mut Fleet, name: &str, amount: f64) -> Result<()> {
    let vessel = fleet
        .get_mut(name)
        .ok_or_else(|| BoatyardError::NotFound(name.to_string()))?;

    if amount >= vessel.outstanding_fees {
        return Err(BoatyardError::Overpayment {
            amount,
            owed: vessel.outstanding_fees,
        });
    }

    vessel.outstanding_fees -= amount;
    Ok(())
}
