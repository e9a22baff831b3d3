use serde::{Deserialize, Serialize};

/// One normalized employment observation.
///
/// Every field is guaranteed present after normalization; `salary_usd` is the
/// primary analytical quantity, `salary` keeps the original-currency amount
/// but is not used by the metrics or insight stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub year: i64,
    pub seniority: String,
    pub contract: String,
    pub title: String,
    pub salary: f64,
    pub salary_usd: f64,
    pub residence: String,
    pub remote: String,
    pub company_location: String,
    pub company_size: String,
}

impl Record {
    /// Canonical column headers in row-display order.
    pub fn headers() -> Vec<String> {
        [
            "year",
            "seniority",
            "contract",
            "title",
            "salary",
            "salary_usd",
            "residence",
            "remote",
            "company_location",
            "company_size",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    /// Renders the record as display cells matching [`Record::headers`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            self.seniority.clone(),
            self.contract.clone(),
            self.title.clone(),
            format_number(self.salary),
            format_number(self.salary_usd),
            self.residence.clone(),
            self.remote.clone(),
            self.company_location.clone(),
            self.company_size.clone(),
        ]
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            year: 2024,
            seniority: "Senior".to_string(),
            contract: "Full-time".to_string(),
            title: "Data Scientist".to_string(),
            salary: 120_000.0,
            salary_usd: 120_000.0,
            residence: "US".to_string(),
            remote: "Remote".to_string(),
            company_location: "US".to_string(),
            company_size: "Medium".to_string(),
        }
    }

    #[test]
    fn headers_and_row_align() {
        let record = sample_record();
        assert_eq!(Record::headers().len(), record.to_row().len());
    }

    #[test]
    fn integral_salaries_render_without_decimals() {
        let row = sample_record().to_row();
        assert_eq!(row[4], "120000");
        assert_eq!(row[5], "120000");
    }

    #[test]
    fn fractional_salaries_keep_two_decimals() {
        assert_eq!(format_number(1234.5), "1234.50");
    }
}
