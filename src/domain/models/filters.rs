use serde::{Deserialize, Serialize};

/// Employment status of a candidate profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkStatus {
    Fresher,
    Experienced,
}

impl WorkStatus {
    pub fn wire_code(&self) -> &'static str {
        match self {
            WorkStatus::Fresher => "FRESHER",
            WorkStatus::Experienced => "EXPERIENCED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Fresher => "Fresher",
            WorkStatus::Experienced => "Experienced",
        }
    }

    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "FRESHER" => Some(WorkStatus::Fresher),
            "EXPERIENCED" => Some(WorkStatus::Experienced),
            _ => None,
        }
    }

    pub fn options() -> &'static [WorkStatus] {
        &[WorkStatus::Fresher, WorkStatus::Experienced]
    }
}

/// How soon a candidate can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    FifteenDaysOrLess,
    OneMonth,
    TwoMonths,
    ThreeMonths,
    MoreThanThreeMonths,
}

impl Availability {
    pub fn wire_code(&self) -> &'static str {
        match self {
            Availability::FifteenDaysOrLess => "15_DAYS_OR_LESS",
            Availability::OneMonth => "1_MONTH",
            Availability::TwoMonths => "2_MONTHS",
            Availability::ThreeMonths => "3_MONTHS",
            Availability::MoreThanThreeMonths => "MORE_THAN_3_MONTHS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::FifteenDaysOrLess => "15 Days or less",
            Availability::OneMonth => "1 Month",
            Availability::TwoMonths => "2 Months",
            Availability::ThreeMonths => "3 Months",
            Availability::MoreThanThreeMonths => "More than 3 Months",
        }
    }

    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "15_DAYS_OR_LESS" => Some(Availability::FifteenDaysOrLess),
            "1_MONTH" => Some(Availability::OneMonth),
            "2_MONTHS" => Some(Availability::TwoMonths),
            "3_MONTHS" => Some(Availability::ThreeMonths),
            "MORE_THAN_3_MONTHS" => Some(Availability::MoreThanThreeMonths),
            _ => None,
        }
    }

    pub fn options() -> &'static [Availability] {
        &[
            Availability::FifteenDaysOrLess,
            Availability::OneMonth,
            Availability::TwoMonths,
            Availability::ThreeMonths,
            Availability::MoreThanThreeMonths,
        ]
    }
}

/// Highest education level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    SchoolOrBelow,
    Diploma,
    Graduate,
    PostGraduate,
    Doctorate,
}

impl EducationLevel {
    pub fn wire_code(&self) -> &'static str {
        match self {
            EducationLevel::SchoolOrBelow => "SCHOOL",
            EducationLevel::Diploma => "DIPLOMA",
            EducationLevel::Graduate => "GRADUATE",
            EducationLevel::PostGraduate => "POST_GRADUATE",
            EducationLevel::Doctorate => "DOCTORATE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::SchoolOrBelow => "12th or below",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::PostGraduate => "Post Graduate",
            EducationLevel::Doctorate => "Doctorate",
        }
    }

    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "SCHOOL" => Some(EducationLevel::SchoolOrBelow),
            "DIPLOMA" => Some(EducationLevel::Diploma),
            "GRADUATE" => Some(EducationLevel::Graduate),
            "POST_GRADUATE" => Some(EducationLevel::PostGraduate),
            "DOCTORATE" => Some(EducationLevel::Doctorate),
            _ => None,
        }
    }

    pub fn options() -> &'static [EducationLevel] {
        &[
            EducationLevel::SchoolOrBelow,
            EducationLevel::Diploma,
            EducationLevel::Graduate,
            EducationLevel::PostGraduate,
            EducationLevel::Doctorate,
        ]
    }
}

/// Notice period expressed as a maximum number of days.
/// Candidates whose notice period is at most the selected code match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticePeriod {
    Immediate,
    FifteenDays,
    OneMonth,
    TwoMonths,
    ThreeMonths,
}

impl NoticePeriod {
    /// Day count sent over the wire.
    pub fn days(&self) -> u16 {
        match self {
            NoticePeriod::Immediate => 0,
            NoticePeriod::FifteenDays => 15,
            NoticePeriod::OneMonth => 30,
            NoticePeriod::TwoMonths => 60,
            NoticePeriod::ThreeMonths => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoticePeriod::Immediate => "Immediate",
            NoticePeriod::FifteenDays => "15 Days",
            NoticePeriod::OneMonth => "1 Month",
            NoticePeriod::TwoMonths => "2 Months",
            NoticePeriod::ThreeMonths => "3 Months",
        }
    }

    pub fn from_days(days: u16) -> Option<Self> {
        match days {
            0 => Some(NoticePeriod::Immediate),
            15 => Some(NoticePeriod::FifteenDays),
            30 => Some(NoticePeriod::OneMonth),
            60 => Some(NoticePeriod::TwoMonths),
            90 => Some(NoticePeriod::ThreeMonths),
            _ => None,
        }
    }

    pub fn options() -> &'static [NoticePeriod] {
        &[
            NoticePeriod::Immediate,
            NoticePeriod::FifteenDays,
            NoticePeriod::OneMonth,
            NoticePeriod::TwoMonths,
            NoticePeriod::ThreeMonths,
        ]
    }
}

/// In-progress search criteria. Every field is optional; absence means
/// "no constraint". Experience and salary bounds are not cross-validated
/// here - the server is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDraft {
    pub keywords: String,
    pub location: String,
    pub exp_min: Option<u8>,
    pub exp_max: Option<u8>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub notice_period: Option<NoticePeriod>,
    pub work_status: Option<WorkStatus>,
    pub availability_to_join: Option<Availability>,
    pub education: Option<EducationLevel>,
    pub updated_within: Option<u16>,
}

impl FilterDraft {
    /// True when no field carries a constraint (strings count as empty
    /// after trimming).
    pub fn is_empty(&self) -> bool {
        self.keywords.trim().is_empty()
            && self.location.trim().is_empty()
            && self.exp_min.is_none()
            && self.exp_max.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.notice_period.is_none()
            && self.work_status.is_none()
            && self.availability_to_join.is_none()
            && self.education.is_none()
            && self.updated_within.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_empty() {
        assert!(FilterDraft::default().is_empty());
    }

    #[test]
    fn test_whitespace_only_keywords_count_as_empty() {
        let draft = FilterDraft {
            keywords: "   ".to_string(),
            ..Default::default()
        };
        assert!(draft.is_empty());
    }

    #[test]
    fn test_single_field_makes_draft_non_empty() {
        let draft = FilterDraft {
            notice_period: Some(NoticePeriod::OneMonth),
            ..Default::default()
        };
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_notice_period_wire_roundtrip() {
        for period in NoticePeriod::options() {
            assert_eq!(NoticePeriod::from_days(period.days()), Some(*period));
        }
    }

    #[test]
    fn test_work_status_from_wire_rejects_unknown() {
        assert_eq!(WorkStatus::from_wire("INTERN"), None);
    }
}
