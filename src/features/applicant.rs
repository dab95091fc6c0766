//! Raw applicant attributes as collected by the form.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::domains::{
    Category, CheckingAccount, CreditHistory, Employment, ForeignWorker, Housing, Job,
    OtherDebtors, OtherInstallmentPlans, PersonalStatus, Property, Purpose, Savings, Telephone,
};

/// Continuous attributes copied verbatim into the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    Age,
    Amount,
    Duration,
    InstallmentRate,
    ResidenceDuration,
    ExistingCredits,
    PeopleLiable,
}

impl NumericField {
    /// All numeric fields in form order.
    pub const ALL: &'static [NumericField] = &[
        NumericField::Age,
        NumericField::Amount,
        NumericField::Duration,
        NumericField::InstallmentRate,
        NumericField::ResidenceDuration,
        NumericField::ExistingCredits,
        NumericField::PeopleLiable,
    ];

    /// Schema column that receives the value.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::Amount => "Amount",
            NumericField::Duration => "Duration",
            NumericField::InstallmentRate => "InstallmentRatePercentage",
            NumericField::ResidenceDuration => "ResidenceDuration",
            NumericField::ExistingCredits => "NumberExistingCredits",
            NumericField::PeopleLiable => "NumberPeopleMaintenance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::Amount => "Credit Amount ($)",
            NumericField::Duration => "Duration (Months)",
            NumericField::InstallmentRate => "Installment Rate %",
            NumericField::ResidenceDuration => "Residence Duration (Years)",
            NumericField::ExistingCredits => "Existing Credits",
            NumericField::PeopleLiable => "People Liable for",
        }
    }

    /// Range enforced by the form widget.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            NumericField::Age => 18..=100,
            NumericField::Amount => 250..=20_000,
            NumericField::Duration => 4..=72,
            NumericField::InstallmentRate => 1..=4,
            NumericField::ResidenceDuration => 1..=4,
            NumericField::ExistingCredits => 1..=4,
            NumericField::PeopleLiable => 1..=2,
        }
    }
}

/// Numeric part of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericInputs {
    pub age: u32,
    pub amount: u32,
    pub duration: u32,
    pub installment_rate: u32,
    pub residence_duration: u32,
    pub existing_credits: u32,
    pub people_liable: u32,
}

impl Default for NumericInputs {
    fn default() -> Self {
        Self {
            age: 30,
            amount: 2000,
            duration: 24,
            installment_rate: 3,
            residence_duration: 2,
            existing_credits: 1,
            people_liable: 1,
        }
    }
}

impl NumericInputs {
    pub fn get(&self, field: NumericField) -> u32 {
        match field {
            NumericField::Age => self.age,
            NumericField::Amount => self.amount,
            NumericField::Duration => self.duration,
            NumericField::InstallmentRate => self.installment_rate,
            NumericField::ResidenceDuration => self.residence_duration,
            NumericField::ExistingCredits => self.existing_credits,
            NumericField::PeopleLiable => self.people_liable,
        }
    }

    pub fn get_mut(&mut self, field: NumericField) -> &mut u32 {
        match field {
            NumericField::Age => &mut self.age,
            NumericField::Amount => &mut self.amount,
            NumericField::Duration => &mut self.duration,
            NumericField::InstallmentRate => &mut self.installment_rate,
            NumericField::ResidenceDuration => &mut self.residence_duration,
            NumericField::ExistingCredits => &mut self.existing_credits,
            NumericField::PeopleLiable => &mut self.people_liable,
        }
    }

    /// Clamp every field into its widget range.
    pub fn clamped(mut self) -> Self {
        for &field in NumericField::ALL {
            let range = field.range();
            let value = self.get_mut(field);
            *value = (*value).clamp(*range.start(), *range.end());
        }
        self
    }
}

/// A fully typed application; every categorical choice is a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantProfile {
    #[serde(flatten)]
    pub numeric: NumericInputs,
    pub checking_account: CheckingAccount,
    pub credit_history: CreditHistory,
    pub savings: Savings,
    pub employment: Employment,
    pub personal_status: PersonalStatus,
    pub other_debtors: OtherDebtors,
    pub property: Property,
    pub other_installment_plans: OtherInstallmentPlans,
    pub housing: Housing,
    pub job: Job,
    pub purpose: Purpose,
    pub telephone: Telephone,
    pub foreign_worker: ForeignWorker,
}

/// An application whose categorical choices are free-text form labels.
///
/// Missing keys take the form defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledApplicant {
    #[serde(flatten)]
    pub numeric: NumericInputs,
    pub checking_account: String,
    pub credit_history: String,
    pub savings: String,
    pub employment: String,
    pub personal_status: String,
    pub other_debtors: String,
    pub property: String,
    pub other_installment_plans: String,
    pub housing: String,
    pub job: String,
    pub purpose: String,
    pub telephone: String,
    pub foreign_worker: String,
}

impl Default for LabeledApplicant {
    fn default() -> Self {
        Self::from(&ApplicantProfile::default())
    }
}

impl From<&ApplicantProfile> for LabeledApplicant {
    fn from(profile: &ApplicantProfile) -> Self {
        Self {
            numeric: profile.numeric,
            checking_account: profile.checking_account.label().to_string(),
            credit_history: profile.credit_history.label().to_string(),
            savings: profile.savings.label().to_string(),
            employment: profile.employment.label().to_string(),
            personal_status: profile.personal_status.label().to_string(),
            other_debtors: profile.other_debtors.label().to_string(),
            property: profile.property.label().to_string(),
            other_installment_plans: profile.other_installment_plans.label().to_string(),
            housing: profile.housing.label().to_string(),
            job: profile.job.label().to_string(),
            purpose: profile.purpose.label().to_string(),
            telephone: profile.telephone.label().to_string(),
            foreign_worker: profile.foreign_worker.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_defaults() {
        let numeric = NumericInputs::default();
        assert_eq!(numeric.age, 30);
        assert_eq!(numeric.amount, 2000);
        assert_eq!(numeric.duration, 24);
        assert_eq!(numeric.installment_rate, 3);
        assert_eq!(numeric.residence_duration, 2);
        assert_eq!(numeric.existing_credits, 1);
        assert_eq!(numeric.people_liable, 1);
        for &field in NumericField::ALL {
            assert!(field.range().contains(&numeric.get(field)), "{field:?}");
        }
    }

    #[test]
    fn clamped_pulls_values_into_widget_ranges() {
        let numeric = NumericInputs {
            age: 5,
            amount: 50_000,
            duration: 100,
            people_liable: 0,
            ..NumericInputs::default()
        }
        .clamped();
        assert_eq!(numeric.age, 18);
        assert_eq!(numeric.amount, 20_000);
        assert_eq!(numeric.duration, 72);
        assert_eq!(numeric.people_liable, 1);
    }

    #[test]
    fn labeled_applicant_parses_partial_toml() {
        let parsed: LabeledApplicant = toml::from_str(
            r#"
            age = 45
            checking_account = "No Checking Account"
            telephone = "Yes, Registered under customer name"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.numeric.age, 45);
        assert_eq!(parsed.numeric.amount, 2000);
        assert_eq!(parsed.checking_account, "No Checking Account");
        assert_eq!(parsed.savings, "< 100 DM");
        assert_eq!(parsed.foreign_worker, "Yes");
    }

    #[test]
    fn profile_defaults_to_first_options() {
        let profile = ApplicantProfile::default();
        assert_eq!(profile.checking_account, CheckingAccount::ALL[0]);
        assert_eq!(profile.purpose, Purpose::ALL[0]);
        assert_eq!(profile.job, Job::ALL[0]);
        assert_eq!(profile.telephone, Telephone::None);
        assert_eq!(profile.foreign_worker, ForeignWorker::Yes);
    }
}
