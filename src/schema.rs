use thiserror::Error;

use crate::data::Record;

/// Raw source column identifiers mapped to their canonical field names.
///
/// The table is fixed configuration, not runtime state; every well-formed
/// input carries all eleven raw columns.
pub const COLUMN_MAP: [(&str, &str); 11] = [
    ("work_year", "year"),
    ("experience_level", "seniority"),
    ("employment_type", "contract"),
    ("job_title", "title"),
    ("salary", "salary"),
    ("salary_currency", "salary_currency"),
    ("salary_in_usd", "salary_usd"),
    ("employee_residence", "residence"),
    ("remote_ratio", "remote"),
    ("company_location", "company_location"),
    ("company_size", "company_size"),
];

/// Seniority display labels from least to most senior. Downstream components
/// rely on this being the full closed set of mapped levels.
pub const SENIORITY_LEVELS: [&str; 4] = ["Junior", "Mid-level", "Senior", "Executive"];

pub const REMOTE_ON_SITE: &str = "On-site";
pub const REMOTE_HYBRID: &str = "Hybrid";
pub const REMOTE_REMOTE: &str = "Remote";

/// Curated display names for well-known job titles. Titles outside this table
/// pass through unchanged; the table also folds spelling variants (for
/// example `ML Engineer`) onto one canonical name.
const JOB_TITLES: [(&str, &str); 24] = [
    ("Data Scientist", "Data Scientist"),
    ("Data Engineer", "Data Engineer"),
    ("Data Analyst", "Data Analyst"),
    ("Machine Learning Engineer", "Machine Learning Engineer"),
    ("ML Engineer", "Machine Learning Engineer"),
    ("Research Scientist", "Research Scientist"),
    ("Data Science Manager", "Data Science Manager"),
    ("Data Architect", "Data Architect"),
    ("Analytics Engineer", "Analytics Engineer"),
    ("Business Intelligence Developer", "Business Intelligence Developer"),
    ("Data Science Consultant", "Data Science Consultant"),
    ("Head of Data", "Head of Data"),
    ("Principal Data Scientist", "Principal Data Scientist"),
    ("Applied Scientist", "Applied Scientist"),
    ("Research Team Lead", "Research Team Lead"),
    ("Analytics Engineering Manager", "Analytics Engineering Manager"),
    ("Data Science Tech Lead", "Data Science Tech Lead"),
    ("Applied AI ML Lead", "Applied AI/ML Lead"),
    ("Head of Applied AI", "Head of Applied AI"),
    ("Head of Machine Learning", "Head of Machine Learning"),
    (
        "Machine Learning Performance Engineer",
        "Machine Learning Performance Engineer",
    ),
    ("Director of Product Management", "Director of Product Management"),
    ("Engineering Manager", "Engineering Manager"),
    ("AWS Data Architect", "AWS Data Architect"),
];

/// Raw input that does not match the expected source schema. This is a
/// data-integrity fault and propagates to the caller instead of being
/// absorbed into the normalized dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column '{0}' is missing from the input header")]
    MissingColumn(&'static str),
}

/// Positions of the eleven raw columns within one concrete input header.
#[derive(Debug, Clone, Copy)]
pub struct RawColumns {
    pub work_year: usize,
    pub experience_level: usize,
    pub employment_type: usize,
    pub job_title: usize,
    pub salary: usize,
    pub salary_currency: usize,
    pub salary_in_usd: usize,
    pub employee_residence: usize,
    pub remote_ratio: usize,
    pub company_location: usize,
    pub company_size: usize,
}

impl RawColumns {
    /// Locates every expected raw column in `headers`, failing fast on the
    /// first one that is absent.
    pub fn resolve(headers: &csv::StringRecord) -> Result<Self, SchemaError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or(SchemaError::MissingColumn(name))
        };
        Ok(Self {
            work_year: position("work_year")?,
            experience_level: position("experience_level")?,
            employment_type: position("employment_type")?,
            job_title: position("job_title")?,
            salary: position("salary")?,
            salary_currency: position("salary_currency")?,
            salary_in_usd: position("salary_in_usd")?,
            employee_residence: position("employee_residence")?,
            remote_ratio: position("remote_ratio")?,
            company_location: position("company_location")?,
            company_size: position("company_size")?,
        })
    }
}

/// One raw row after field renaming and categorical translation but before
/// the normalizer has ruled on completeness. Every field stays optional here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedRow {
    pub year: Option<String>,
    pub seniority: Option<String>,
    pub contract: Option<String>,
    pub title: Option<String>,
    pub salary: Option<String>,
    pub salary_currency: Option<String>,
    pub salary_usd: Option<String>,
    pub residence: Option<String>,
    pub remote: Option<String>,
    pub company_location: Option<String>,
    pub company_size: Option<String>,
}

/// Maps one raw CSV row onto the canonical schema, recoding categorical
/// values into display labels. Pure: the input record is not touched.
pub fn translate_record(columns: &RawColumns, record: &csv::StringRecord) -> TranslatedRow {
    let cell = |index: usize| {
        record
            .get(index)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };
    TranslatedRow {
        year: cell(columns.work_year),
        seniority: cell(columns.experience_level).map(|code| translate_seniority(&code).to_string()),
        contract: cell(columns.employment_type).map(|code| translate_contract(&code).to_string()),
        title: cell(columns.job_title).map(|title| translate_title(&title).to_string()),
        salary: cell(columns.salary),
        salary_currency: cell(columns.salary_currency),
        salary_usd: cell(columns.salary_in_usd),
        residence: cell(columns.employee_residence),
        remote: cell(columns.remote_ratio).map(|ratio| translate_remote_ratio(&ratio).to_string()),
        company_location: cell(columns.company_location),
        company_size: cell(columns.company_size).map(|code| translate_company_size(&code).to_string()),
    }
}

pub fn translate_seniority(code: &str) -> &str {
    match code {
        "EN" => "Junior",
        "MI" => "Mid-level",
        "SE" => "Senior",
        "EX" => "Executive",
        other => other,
    }
}

pub fn translate_contract(code: &str) -> &str {
    match code {
        "FT" => "Full-time",
        "PT" => "Part-time",
        "CT" => "Contract",
        "FL" => "Freelance",
        other => other,
    }
}

pub fn translate_company_size(code: &str) -> &str {
    match code {
        "S" => "Small",
        "M" => "Medium",
        "L" => "Large",
        other => other,
    }
}

/// The ratio table only covers the three levels {0, 50, 100}; any other value
/// stays untranslated rather than being coerced to the nearest bucket.
pub fn translate_remote_ratio(ratio: &str) -> &str {
    match ratio {
        "0" => REMOTE_ON_SITE,
        "50" => REMOTE_HYBRID,
        "100" => REMOTE_REMOTE,
        other => other,
    }
}

pub fn translate_title(title: &str) -> &str {
    JOB_TITLES
        .iter()
        .find(|(raw, _)| *raw == title)
        .map(|(_, display)| *display)
        .unwrap_or(title)
}

/// Rank of a seniority label within [`SENIORITY_LEVELS`]; unmapped labels
/// sort after the known ones.
pub fn seniority_rank(label: &str) -> usize {
    SENIORITY_LEVELS
        .iter()
        .position(|level| *level == label)
        .unwrap_or(SENIORITY_LEVELS.len())
}

/// Admits a translated row into the canonical dataset, or rejects it.
///
/// A row is rejected when any field is missing or a numeric field fails to
/// parse. Rejection is silent at this level; the loader accounts for dropped
/// rows. The year is coerced to an exact integer so later set-membership
/// filtering never goes through floating point.
pub fn normalize_row(row: TranslatedRow) -> Option<Record> {
    // The currency code must be present for the row to survive, matching the
    // drop-incomplete-rows policy, but it is not carried downstream.
    row.salary_currency.as_ref()?;
    Some(Record {
        year: parse_year(&row.year?)?,
        seniority: row.seniority?,
        contract: row.contract?,
        title: row.title?,
        salary: row.salary?.parse().ok()?,
        salary_usd: row.salary_usd?.parse().ok()?,
        residence: row.residence?,
        remote: row.remote?,
        company_location: row.company_location?,
        company_size: row.company_size?,
    })
}

/// Parses a year value, accepting integral float renderings such as
/// `"2024.0"` that float-typed sources produce.
fn parse_year(value: &str) -> Option<i64> {
    if let Ok(year) = value.parse::<i64>() {
        return Some(year);
    }
    let float: f64 = value.parse().ok()?;
    (float.fract() == 0.0).then_some(float as i64)
}
