//! Applicant attributes and their one-hot encoding into model input records.

mod applicant;
pub mod domains;
mod encode;
mod record;
mod schema;

pub use applicant::{ApplicantProfile, LabeledApplicant, NumericField, NumericInputs};
pub use domains::{Category, Domain, ForeignWorker, Telephone};
pub use encode::{
    EncodedApplicant, FOREIGN_WORKER_COLUMN, TELEPHONE_COLUMN, encode, encode_labels,
};
pub use record::ApplicantRecord;
pub use schema::{FeatureSchema, SchemaError};

/// Feature columns of the German credit dataset export, in file order.
pub const CREDIT_COLUMNS: &[&str] = &[
    "Duration",
    "Amount",
    "InstallmentRatePercentage",
    "ResidenceDuration",
    "Age",
    "NumberExistingCredits",
    "NumberPeopleMaintenance",
    "Telephone",
    "ForeignWorker",
    "CheckingAccountStatus.lt.0",
    "CheckingAccountStatus.0.to.200",
    "CheckingAccountStatus.gt.200",
    "CheckingAccountStatus.none",
    "CreditHistory.NoCredit.AllPaid",
    "CreditHistory.ThisBank.AllPaid",
    "CreditHistory.PaidDuly",
    "CreditHistory.Delay",
    "CreditHistory.Critical",
    "Purpose.NewCar",
    "Purpose.UsedCar",
    "Purpose.Furniture.Equipment",
    "Purpose.Radio.Television",
    "Purpose.DomesticAppliance",
    "Purpose.Repairs",
    "Purpose.Education",
    "Purpose.Vacation",
    "Purpose.Retraining",
    "Purpose.Business",
    "Purpose.Other",
    "SavingsAccountBonds.lt.100",
    "SavingsAccountBonds.100.to.500",
    "SavingsAccountBonds.500.to.1000",
    "SavingsAccountBonds.gt.1000",
    "SavingsAccountBonds.Unknown",
    "EmploymentDuration.lt.1",
    "EmploymentDuration.1.to.4",
    "EmploymentDuration.4.to.7",
    "EmploymentDuration.gt.7",
    "EmploymentDuration.Unemployed",
    "Personal.Male.Divorced.Seperated",
    "Personal.Female.NotSingle",
    "Personal.Male.Single",
    "Personal.Male.Married.Widowed",
    "Personal.Female.Single",
    "OtherDebtorsGuarantors.None",
    "OtherDebtorsGuarantors.CoApplicant",
    "OtherDebtorsGuarantors.Guarantor",
    "Property.RealEstate",
    "Property.Insurance",
    "Property.CarOther",
    "Property.Unknown",
    "OtherInstallmentPlans.Bank",
    "OtherInstallmentPlans.Stores",
    "OtherInstallmentPlans.None",
    "Housing.Rent",
    "Housing.Own",
    "Housing.ForFree",
    "Job.UnemployedUnskilled",
    "Job.UnskilledResident",
    "Job.SkilledEmployee",
    "Job.Management.SelfEmp.HighlyQualified",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_choices_are_reachable_from_the_module_root() {
        let labels: Vec<&str> = Telephone::ALL
            .iter()
            .map(|t| t.label())
            .chain(ForeignWorker::ALL.iter().map(|f| f.label()))
            .collect();
        assert_eq!(
            labels,
            ["None", "Yes, Registered under customer name", "Yes", "No"]
        );
    }

    #[test]
    fn credit_columns_cover_every_encoder_output() {
        assert_eq!(CREDIT_COLUMNS.len(), 61);
        let schema =
            FeatureSchema::new(CREDIT_COLUMNS.iter().map(|c| c.to_string()).collect()).unwrap();
        for &field in NumericField::ALL {
            assert!(schema.contains(field.column()), "{}", field.column());
        }
        assert!(schema.contains(TELEPHONE_COLUMN));
        assert!(schema.contains(FOREIGN_WORKER_COLUMN));
        for domain in Domain::ALL {
            for column in domain.columns() {
                assert!(schema.contains(column), "{column}");
            }
        }
    }
}
