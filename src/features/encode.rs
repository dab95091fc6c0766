use super::applicant::{ApplicantProfile, LabeledApplicant, NumericField, NumericInputs};
use super::domains::{
    Category, CheckingAccount, CreditHistory, Domain, Employment, ForeignWorker, Housing, Job,
    OtherDebtors, OtherInstallmentPlans, PersonalStatus, Property, Purpose, Savings, Telephone,
};
use super::record::ApplicantRecord;
use super::schema::FeatureSchema;

/// Schema column for the telephone indicator.
pub const TELEPHONE_COLUMN: &str = "Telephone";
/// Schema column for the foreign-worker indicator.
pub const FOREIGN_WORKER_COLUMN: &str = "ForeignWorker";

/// Result of encoding one application.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedApplicant {
    pub record: ApplicantRecord,
    /// Domains whose label matched no known option; their columns stay 0.
    pub unresolved: Vec<Domain>,
    /// Columns the encoder wanted to write that the schema does not carry.
    pub missing_columns: Vec<&'static str>,
}

/// Encode a typed application into a record congruent with `schema`.
pub fn encode(profile: &ApplicantProfile, schema: &FeatureSchema) -> ApplicantRecord {
    let selections = [
        select(profile.checking_account),
        select(profile.credit_history),
        select(profile.savings),
        select(profile.employment),
        select(profile.personal_status),
        select(profile.other_debtors),
        select(profile.property),
        select(profile.other_installment_plans),
        select(profile.housing),
        select(profile.job),
        select(profile.purpose),
    ];
    assemble(
        &profile.numeric,
        &selections,
        profile.telephone,
        profile.foreign_worker,
        schema,
    )
    .record
}

/// Encode an application given as free-text labels.
///
/// Labels that match no option leave their domain all-zero and are listed in
/// [`EncodedApplicant::unresolved`]; encoding itself never fails.
pub fn encode_labels(applicant: &LabeledApplicant, schema: &FeatureSchema) -> EncodedApplicant {
    let selections = [
        resolve::<CheckingAccount>(&applicant.checking_account),
        resolve::<CreditHistory>(&applicant.credit_history),
        resolve::<Savings>(&applicant.savings),
        resolve::<Employment>(&applicant.employment),
        resolve::<PersonalStatus>(&applicant.personal_status),
        resolve::<OtherDebtors>(&applicant.other_debtors),
        resolve::<Property>(&applicant.property),
        resolve::<OtherInstallmentPlans>(&applicant.other_installment_plans),
        resolve::<Housing>(&applicant.housing),
        resolve::<Job>(&applicant.job),
        resolve::<Purpose>(&applicant.purpose),
    ];
    let encoded = assemble(
        &applicant.numeric,
        &selections,
        Telephone::from_label(&applicant.telephone),
        ForeignWorker::from_label(&applicant.foreign_worker),
        schema,
    );
    for domain in &encoded.unresolved {
        tracing::warn!(
            "Unrecognized {} label; leaving its columns at 0",
            domain.title()
        );
    }
    encoded
}

type Selection = (Domain, Option<&'static str>);

fn select<C: Category>(value: C) -> Selection {
    (C::DOMAIN, Some(value.column()))
}

fn resolve<C: Category>(label: &str) -> Selection {
    (C::DOMAIN, C::from_label(label).map(C::column))
}

fn assemble(
    numeric: &NumericInputs,
    selections: &[Selection],
    telephone: Telephone,
    foreign_worker: ForeignWorker,
    schema: &FeatureSchema,
) -> EncodedApplicant {
    let mut record = ApplicantRecord::zeroed(schema);
    let mut missing_columns = Vec::new();
    let mut write = |column: &'static str, value: f32| {
        if !record.set(column, value) {
            missing_columns.push(column);
        }
    };

    for &field in NumericField::ALL {
        write(field.column(), numeric.get(field) as f32);
    }
    write(TELEPHONE_COLUMN, telephone.indicator());
    write(FOREIGN_WORKER_COLUMN, foreign_worker.indicator());

    let mut unresolved = Vec::new();
    for &(domain, column) in selections {
        match column {
            Some(column) => write(column, 1.0),
            None => unresolved.push(domain),
        }
    }

    if !missing_columns.is_empty() {
        tracing::debug!(
            "Schema lacks {} encoder column(s): {}",
            missing_columns.len(),
            missing_columns.join(", ")
        );
    }
    EncodedApplicant {
        record,
        unresolved,
        missing_columns,
    }
}
