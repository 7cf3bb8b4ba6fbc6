use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Closed vocabularies
// ---------------------------------------------------------------------------

/// Lower-secondary subjects of the GDPT 2018 programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "Toán")]
    Mathematics,
    #[serde(rename = "Ngữ văn")]
    Literature,
    #[serde(rename = "Tiếng Anh")]
    English,
    #[serde(rename = "Khoa học tự nhiên")]
    NaturalScience,
    #[serde(rename = "Lịch sử và Địa lí")]
    HistoryGeography,
    #[serde(rename = "Giáo dục công dân")]
    CivicEducation,
    #[serde(rename = "Tin học")]
    Informatics,
    #[serde(rename = "Công nghệ")]
    Technology,
    #[serde(rename = "Giáo dục thể chất")]
    PhysicalEducation,
    #[serde(rename = "Nghệ thuật")]
    Arts,
    #[serde(rename = "Hoạt động trải nghiệm, hướng nghiệp")]
    ExperientialActivities,
}

/// Coarse grouping used to pick subject-specific recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectCategory {
    Stem,
    Humanities,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 11] = [
        Subject::Mathematics,
        Subject::Literature,
        Subject::English,
        Subject::NaturalScience,
        Subject::HistoryGeography,
        Subject::CivicEducation,
        Subject::Informatics,
        Subject::Technology,
        Subject::PhysicalEducation,
        Subject::Arts,
        Subject::ExperientialActivities,
    ];

    /// Official Vietnamese subject name.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Toán",
            Subject::Literature => "Ngữ văn",
            Subject::English => "Tiếng Anh",
            Subject::NaturalScience => "Khoa học tự nhiên",
            Subject::HistoryGeography => "Lịch sử và Địa lí",
            Subject::CivicEducation => "Giáo dục công dân",
            Subject::Informatics => "Tin học",
            Subject::Technology => "Công nghệ",
            Subject::PhysicalEducation => "Giáo dục thể chất",
            Subject::Arts => "Nghệ thuật",
            Subject::ExperientialActivities => "Hoạt động trải nghiệm, hướng nghiệp",
        }
    }

    /// Look up a subject by its Vietnamese name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Subject> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Subject::ALL
            .into_iter()
            .find(|s| s.name().to_lowercase() == needle)
    }

    pub fn category(self) -> SubjectCategory {
        match self {
            Subject::Mathematics
            | Subject::NaturalScience
            | Subject::Informatics
            | Subject::Technology => SubjectCategory::Stem,
            Subject::Literature
            | Subject::English
            | Subject::HistoryGeography
            | Subject::CivicEducation => SubjectCategory::Humanities,
            Subject::PhysicalEducation | Subject::Arts | Subject::ExperientialActivities => {
                SubjectCategory::Other
            }
        }
    }
}

/// Recognized pedagogical standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PedagogicalStandard {
    #[serde(rename = "GDPT 2018")]
    Gdpt2018,
    #[serde(rename = "CV 5512")]
    Cv5512,
}

impl PedagogicalStandard {
    pub fn name(self) -> &'static str {
        match self {
            PedagogicalStandard::Gdpt2018 => "GDPT 2018",
            PedagogicalStandard::Cv5512 => "CV 5512",
        }
    }

    /// Exact match on the canonical name after trimming.
    pub fn from_name(name: &str) -> Option<PedagogicalStandard> {
        match name.trim() {
            "GDPT 2018" => Some(PedagogicalStandard::Gdpt2018),
            "CV 5512" => Some(PedagogicalStandard::Cv5512),
            _ => None,
        }
    }
}

/// Bloom's Taxonomy cognitive levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloomLevel {
    Recognition,
    Comprehension,
    Application,
    Analysis,
    Synthesis,
    Evaluation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloomTier {
    Lower,
    Middle,
    Higher,
}

impl BloomLevel {
    pub fn tier(self) -> BloomTier {
        match self {
            BloomLevel::Recognition | BloomLevel::Comprehension => BloomTier::Lower,
            BloomLevel::Application => BloomTier::Middle,
            BloomLevel::Analysis | BloomLevel::Synthesis | BloomLevel::Evaluation => {
                BloomTier::Higher
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BloomLevel::Recognition => "Nhận biết",
            BloomLevel::Comprehension => "Thông hiểu",
            BloomLevel::Application => "Vận dụng",
            BloomLevel::Analysis => "Phân tích",
            BloomLevel::Synthesis => "Tổng hợp",
            BloomLevel::Evaluation => "Đánh giá",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Essay,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Pptx,
    Pdf,
    GoogleSlides,
}

// ---------------------------------------------------------------------------
// Inputs (deserialized from request JSON)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlanInput {
    pub subject: String,
    pub grade_level: i64,
    pub lesson_name: String,
    pub pedagogical_standard: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationInput {
    pub subject: String,
    pub grade_level: i64,
    pub lesson_name: String,
    pub slide_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub subject: String,
    pub grade_level: i64,
    pub topic: String,
    pub question_count: i64,
    pub question_type: QuestionType,
    #[serde(default)]
    pub bloom_levels: Vec<BloomLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_content: Option<String>,
}

/// A validation request tagged by `kind`, for single-entry-point dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationRequest {
    LessonPlan(LessonPlanInput),
    Presentation(PresentationInput),
    Assessment(AssessmentInput),
}

// ---------------------------------------------------------------------------
// Checker results
// ---------------------------------------------------------------------------

/// Outcome of one keyword profile check (GDPT 2018 or CV 5512).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub is_compliant: bool,
    pub score: u32,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminologyResult {
    pub is_valid: bool,
    pub score: u32,
    pub found_terms: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    pub score: u32,
    pub grade: LetterGrade,
    pub recommendations: Vec<String>,
}

/// Full content report: both keyword profiles, terminology, and the weighted overall section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsComplianceReport {
    pub gdpt2018: ComplianceResult,
    pub cv5512: ComplianceResult,
    pub terminology: TerminologyResult,
    pub overall: OverallAssessment,
}

// ---------------------------------------------------------------------------
// Validation envelope
// ---------------------------------------------------------------------------

/// Envelope returned by every public validator.
///
/// `errors`, `warnings` and `suggestions` behave as insertion-ordered sets:
/// the `push_*` methods drop duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub compliance_score: u32,
}

impl Default for EducationalValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            compliance_score: 100,
        }
    }
}

impl EducationalValidationResult {
    pub fn push_error(&mut self, message: impl Into<String>) {
        push_unique(&mut self.errors, message.into());
        self.is_valid = false;
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        push_unique(&mut self.warnings, message.into());
    }

    pub fn push_suggestion(&mut self, message: impl Into<String>) {
        push_unique(&mut self.suggestions, message.into());
    }
}

pub(crate) fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
