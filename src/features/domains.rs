//! Enumerated categorical attributes and their one-hot column names.
//!
//! Every value maps to exactly one schema column through an exhaustive `match`,
//! so a typed selection can never fall outside its domain. Free-text labels
//! are resolved through [`Category::from_label`].

use serde::{Deserialize, Serialize};

/// A closed set of human-readable choices backed by one-hot columns.
pub trait Category: Copy + Eq + Sized + 'static {
    /// Every value, in form order. The first entry is the form default.
    const ALL: &'static [Self];
    /// Substring needles checked in order when a label is not an exact match.
    const MATCHERS: &'static [(&'static str, Self)];
    /// Domain this category belongs to.
    const DOMAIN: Domain;

    /// Display label shown on the form.
    fn label(self) -> &'static str;
    /// One-hot column set to 1 for this value.
    fn column(self) -> &'static str;

    /// Resolve a display label, falling back to substring matching.
    ///
    /// The label is compared as given, without trimming. The first matching
    /// needle wins.
    fn from_label(label: &str) -> Option<Self> {
        if let Some(value) = Self::ALL.iter().copied().find(|v| v.label() == label) {
            return Some(value);
        }
        Self::MATCHERS
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, value)| *value)
    }
}

/// Identifies one categorical domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    CheckingAccount,
    CreditHistory,
    Savings,
    Employment,
    PersonalStatus,
    OtherDebtors,
    Property,
    OtherInstallmentPlans,
    Housing,
    Job,
    Purpose,
}

impl Domain {
    /// All categorical domains in form order.
    pub const ALL: &'static [Domain] = &[
        Domain::CheckingAccount,
        Domain::CreditHistory,
        Domain::Savings,
        Domain::Employment,
        Domain::PersonalStatus,
        Domain::OtherDebtors,
        Domain::Property,
        Domain::OtherInstallmentPlans,
        Domain::Housing,
        Domain::Job,
        Domain::Purpose,
    ];

    /// Form title for the domain.
    pub fn title(self) -> &'static str {
        match self {
            Domain::CheckingAccount => "Checking Account Status",
            Domain::CreditHistory => "Credit History",
            Domain::Savings => "Savings Account / Bonds",
            Domain::Employment => "Present Employment Since",
            Domain::PersonalStatus => "Personal Status & Sex",
            Domain::OtherDebtors => "Other Debtors / Guarantors",
            Domain::Property => "Property",
            Domain::OtherInstallmentPlans => "Other Installment Plans",
            Domain::Housing => "Housing",
            Domain::Job => "Job",
            Domain::Purpose => "Purpose",
        }
    }

    /// Every one-hot column owned by the domain.
    pub fn columns(self) -> Vec<&'static str> {
        match self {
            Domain::CheckingAccount => columns_of::<CheckingAccount>(),
            Domain::CreditHistory => columns_of::<CreditHistory>(),
            Domain::Savings => columns_of::<Savings>(),
            Domain::Employment => columns_of::<Employment>(),
            Domain::PersonalStatus => columns_of::<PersonalStatus>(),
            Domain::OtherDebtors => columns_of::<OtherDebtors>(),
            Domain::Property => columns_of::<Property>(),
            Domain::OtherInstallmentPlans => columns_of::<OtherInstallmentPlans>(),
            Domain::Housing => columns_of::<Housing>(),
            Domain::Job => columns_of::<Job>(),
            Domain::Purpose => columns_of::<Purpose>(),
        }
    }
}

fn columns_of<C: Category>() -> Vec<&'static str> {
    C::ALL.iter().map(|value| value.column()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckingAccount {
    #[default]
    Negative,
    UpTo200,
    Over200,
    NoAccount,
}

impl Category for CheckingAccount {
    const ALL: &'static [Self] = &[Self::Negative, Self::UpTo200, Self::Over200, Self::NoAccount];
    // Checking status was only ever compared by exact label.
    const MATCHERS: &'static [(&'static str, Self)] = &[];
    const DOMAIN: Domain = Domain::CheckingAccount;

    fn label(self) -> &'static str {
        match self {
            Self::Negative => "< 0 DM",
            Self::UpTo200 => "0 - 200 DM",
            Self::Over200 => "> 200 DM",
            Self::NoAccount => "No Checking Account",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Negative => "CheckingAccountStatus.lt.0",
            Self::UpTo200 => "CheckingAccountStatus.0.to.200",
            Self::Over200 => "CheckingAccountStatus.gt.200",
            Self::NoAccount => "CheckingAccountStatus.none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditHistory {
    #[default]
    NoCreditsAllPaid,
    ThisBankAllPaid,
    PaidDuly,
    Delay,
    Critical,
}

impl Category for CreditHistory {
    const ALL: &'static [Self] = &[
        Self::NoCreditsAllPaid,
        Self::ThisBankAllPaid,
        Self::PaidDuly,
        Self::Delay,
        Self::Critical,
    ];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("No credits", Self::NoCreditsAllPaid),
        ("this bank", Self::ThisBankAllPaid),
        ("paid duly", Self::PaidDuly),
        ("Delay", Self::Delay),
        ("Critical", Self::Critical),
    ];
    const DOMAIN: Domain = Domain::CreditHistory;

    fn label(self) -> &'static str {
        match self {
            Self::NoCreditsAllPaid => "No credits taken / All paid",
            Self::ThisBankAllPaid => "All credits at this bank paid",
            Self::PaidDuly => "Existing credits paid duly",
            Self::Delay => "Delay in past",
            Self::Critical => "Critical account / Other credits existing",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::NoCreditsAllPaid => "CreditHistory.NoCredit.AllPaid",
            Self::ThisBankAllPaid => "CreditHistory.ThisBank.AllPaid",
            Self::PaidDuly => "CreditHistory.PaidDuly",
            Self::Delay => "CreditHistory.Delay",
            Self::Critical => "CreditHistory.Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Savings {
    #[default]
    Below100,
    From100To500,
    From500To1000,
    Over1000,
    Unknown,
}

impl Category for Savings {
    const ALL: &'static [Self] = &[
        Self::Below100,
        Self::From100To500,
        Self::From500To1000,
        Self::Over1000,
        Self::Unknown,
    ];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("< 100", Self::Below100),
        ("100 - 500", Self::From100To500),
        ("500 - 1000", Self::From500To1000),
        ("> 1000", Self::Over1000),
        ("Unknown", Self::Unknown),
    ];
    const DOMAIN: Domain = Domain::Savings;

    fn label(self) -> &'static str {
        match self {
            Self::Below100 => "< 100 DM",
            Self::From100To500 => "100 - 500 DM",
            Self::From500To1000 => "500 - 1000 DM",
            Self::Over1000 => "> 1000 DM",
            Self::Unknown => "Unknown / No Savings",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Below100 => "SavingsAccountBonds.lt.100",
            Self::From100To500 => "SavingsAccountBonds.100.to.500",
            Self::From500To1000 => "SavingsAccountBonds.500.to.1000",
            Self::Over1000 => "SavingsAccountBonds.gt.1000",
            Self::Unknown => "SavingsAccountBonds.Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employment {
    #[default]
    Unemployed,
    BelowOneYear,
    OneToFourYears,
    FourToSevenYears,
    OverSevenYears,
}

impl Category for Employment {
    const ALL: &'static [Self] = &[
        Self::Unemployed,
        Self::BelowOneYear,
        Self::OneToFourYears,
        Self::FourToSevenYears,
        Self::OverSevenYears,
    ];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Unemployed", Self::Unemployed),
        ("< 1", Self::BelowOneYear),
        ("1 - 4", Self::OneToFourYears),
        ("4 - 7", Self::FourToSevenYears),
        ("> 7", Self::OverSevenYears),
    ];
    const DOMAIN: Domain = Domain::Employment;

    fn label(self) -> &'static str {
        match self {
            Self::Unemployed => "Unemployed",
            Self::BelowOneYear => "< 1 year",
            Self::OneToFourYears => "1 - 4 years",
            Self::FourToSevenYears => "4 - 7 years",
            Self::OverSevenYears => "> 7 years",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Unemployed => "EmploymentDuration.Unemployed",
            Self::BelowOneYear => "EmploymentDuration.lt.1",
            Self::OneToFourYears => "EmploymentDuration.1.to.4",
            Self::FourToSevenYears => "EmploymentDuration.4.to.7",
            Self::OverSevenYears => "EmploymentDuration.gt.7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalStatus {
    #[default]
    MaleDivorced,
    FemaleNotSingle,
    MaleSingle,
    MaleMarried,
    FemaleSingle,
}

impl Category for PersonalStatus {
    const ALL: &'static [Self] = &[
        Self::MaleDivorced,
        Self::FemaleNotSingle,
        Self::MaleSingle,
        Self::MaleMarried,
        Self::FemaleSingle,
    ];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Male: Divorced", Self::MaleDivorced),
        ("Female: Divorced", Self::FemaleNotSingle),
        ("Male: Single", Self::MaleSingle),
        ("Male: Married", Self::MaleMarried),
        ("Female: Single", Self::FemaleSingle),
    ];
    const DOMAIN: Domain = Domain::PersonalStatus;

    fn label(self) -> &'static str {
        match self {
            Self::MaleDivorced => "Male: Divorced/Separated",
            Self::FemaleNotSingle => "Female: Divorced/Separated/Married",
            Self::MaleSingle => "Male: Single",
            Self::MaleMarried => "Male: Married/Widowed",
            Self::FemaleSingle => "Female: Single",
        }
    }

    fn column(self) -> &'static str {
        match self {
            // Column spelling follows the dataset.
            Self::MaleDivorced => "Personal.Male.Divorced.Seperated",
            Self::FemaleNotSingle => "Personal.Female.NotSingle",
            Self::MaleSingle => "Personal.Male.Single",
            Self::MaleMarried => "Personal.Male.Married.Widowed",
            // Absent from some training exports; the encoder skips columns
            // the schema does not carry.
            Self::FemaleSingle => "Personal.Female.Single",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherDebtors {
    #[default]
    None,
    CoApplicant,
    Guarantor,
}

impl Category for OtherDebtors {
    const ALL: &'static [Self] = &[Self::None, Self::CoApplicant, Self::Guarantor];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("None", Self::None),
        ("Co-Applicant", Self::CoApplicant),
        ("Guarantor", Self::Guarantor),
    ];
    const DOMAIN: Domain = Domain::OtherDebtors;

    fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::CoApplicant => "Co-Applicant",
            Self::Guarantor => "Guarantor",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::None => "OtherDebtorsGuarantors.None",
            Self::CoApplicant => "OtherDebtorsGuarantors.CoApplicant",
            Self::Guarantor => "OtherDebtorsGuarantors.Guarantor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    #[default]
    RealEstate,
    Insurance,
    CarOrOther,
    Unknown,
}

impl Category for Property {
    const ALL: &'static [Self] = &[Self::RealEstate, Self::Insurance, Self::CarOrOther, Self::Unknown];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Real Estate", Self::RealEstate),
        ("Insurance", Self::Insurance),
        ("Car", Self::CarOrOther),
        ("Unknown", Self::Unknown),
    ];
    const DOMAIN: Domain = Domain::Property;

    fn label(self) -> &'static str {
        match self {
            Self::RealEstate => "Real Estate",
            Self::Insurance => "Building Society Savings/Life Insurance",
            Self::CarOrOther => "Car or Other",
            Self::Unknown => "Unknown / No Property",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::RealEstate => "Property.RealEstate",
            Self::Insurance => "Property.Insurance",
            Self::CarOrOther => "Property.CarOther",
            Self::Unknown => "Property.Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherInstallmentPlans {
    #[default]
    Bank,
    Stores,
    None,
}

impl Category for OtherInstallmentPlans {
    const ALL: &'static [Self] = &[Self::Bank, Self::Stores, Self::None];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Bank", Self::Bank),
        ("Stores", Self::Stores),
        ("None", Self::None),
    ];
    const DOMAIN: Domain = Domain::OtherInstallmentPlans;

    fn label(self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::Stores => "Stores",
            Self::None => "None",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Bank => "OtherInstallmentPlans.Bank",
            Self::Stores => "OtherInstallmentPlans.Stores",
            Self::None => "OtherInstallmentPlans.None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Housing {
    #[default]
    Rent,
    Own,
    ForFree,
}

impl Category for Housing {
    const ALL: &'static [Self] = &[Self::Rent, Self::Own, Self::ForFree];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Rent", Self::Rent),
        ("Own", Self::Own),
        ("For Free", Self::ForFree),
    ];
    const DOMAIN: Domain = Domain::Housing;

    fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Own => "Own",
            Self::ForFree => "For Free",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Rent => "Housing.Rent",
            Self::Own => "Housing.Own",
            Self::ForFree => "Housing.ForFree",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    #[default]
    UnemployedNonResident,
    UnskilledResident,
    Skilled,
    Management,
}

impl Category for Job {
    const ALL: &'static [Self] = &[
        Self::UnemployedNonResident,
        Self::UnskilledResident,
        Self::Skilled,
        Self::Management,
    ];
    // Order matters: "Unskilled (Resident)" also contains "Skilled".
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("Unemployed", Self::UnemployedNonResident),
        ("Unskilled (Resident)", Self::UnskilledResident),
        ("Skilled", Self::Skilled),
        ("Management", Self::Management),
    ];
    const DOMAIN: Domain = Domain::Job;

    fn label(self) -> &'static str {
        match self {
            Self::UnemployedNonResident => "Unemployed / Unskilled (Non-resident)",
            Self::UnskilledResident => "Unskilled (Resident)",
            Self::Skilled => "Skilled Employee / Official",
            Self::Management => "Management / Self-Employed / Highly Qualified",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::UnemployedNonResident => "Job.UnemployedUnskilled",
            Self::UnskilledResident => "Job.UnskilledResident",
            Self::Skilled => "Job.SkilledEmployee",
            Self::Management => "Job.Management.SelfEmp.HighlyQualified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    NewCar,
    UsedCar,
    Furniture,
    RadioTv,
    DomesticAppliance,
    Repairs,
    Education,
    Vacation,
    Retraining,
    Business,
    Other,
}

impl Category for Purpose {
    const ALL: &'static [Self] = &[
        Self::NewCar,
        Self::UsedCar,
        Self::Furniture,
        Self::RadioTv,
        Self::DomesticAppliance,
        Self::Repairs,
        Self::Education,
        Self::Vacation,
        Self::Retraining,
        Self::Business,
        Self::Other,
    ];
    const MATCHERS: &'static [(&'static str, Self)] = &[
        ("New Car", Self::NewCar),
        ("Used Car", Self::UsedCar),
        ("Furniture", Self::Furniture),
        ("Radio", Self::RadioTv),
        ("Domestic", Self::DomesticAppliance),
        ("Repairs", Self::Repairs),
        ("Education", Self::Education),
        ("Vacation", Self::Vacation),
        ("Retraining", Self::Retraining),
        ("Business", Self::Business),
        ("Other", Self::Other),
    ];
    const DOMAIN: Domain = Domain::Purpose;

    fn label(self) -> &'static str {
        match self {
            Self::NewCar => "New Car",
            Self::UsedCar => "Used Car",
            Self::Furniture => "Furniture/Equipment",
            Self::RadioTv => "Radio/TV",
            Self::DomesticAppliance => "Domestic Appliance",
            Self::Repairs => "Repairs",
            Self::Education => "Education",
            Self::Vacation => "Vacation",
            Self::Retraining => "Retraining",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::NewCar => "Purpose.NewCar",
            Self::UsedCar => "Purpose.UsedCar",
            Self::Furniture => "Purpose.Furniture.Equipment",
            Self::RadioTv => "Purpose.Radio.Television",
            Self::DomesticAppliance => "Purpose.DomesticAppliance",
            Self::Repairs => "Purpose.Repairs",
            Self::Education => "Purpose.Education",
            Self::Vacation => "Purpose.Vacation",
            Self::Retraining => "Purpose.Retraining",
            Self::Business => "Purpose.Business",
            Self::Other => "Purpose.Other",
        }
    }
}

/// Whether the applicant has a telephone registered under their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Telephone {
    #[default]
    None,
    Registered,
}

impl Telephone {
    pub const ALL: &'static [Self] = &[Self::None, Self::Registered];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Registered => "Yes, Registered under customer name",
        }
    }

    /// Any label mentioning "Yes" counts as registered.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Yes") {
            Self::Registered
        } else {
            Self::None
        }
    }

    pub fn indicator(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Registered => 1.0,
        }
    }
}

/// Whether the applicant is a foreign worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignWorker {
    #[default]
    Yes,
    No,
}

impl ForeignWorker {
    pub const ALL: &'static [Self] = &[Self::Yes, Self::No];

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Only the exact label "Yes" counts; surrounding whitespace does not.
    pub fn from_label(label: &str) -> Self {
        if label == "Yes" { Self::Yes } else { Self::No }
    }

    pub fn indicator(self) -> f32 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }
}
