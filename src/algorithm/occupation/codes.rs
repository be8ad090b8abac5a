//! Code domains for occupation coding
//!
//! This module defines the ISCED-F detailed field catalogue used as the
//! classification target, the non-occupation sentinel codes, the ten broad
//! field groups and the six aggregated survey categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad ISCED-F field group (the first two digits of a detailed code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldGroup {
    /// 01 Education
    Education = 1,
    /// 02 Arts and humanities
    ArtsHumanities = 2,
    /// 03 Social sciences, journalism and information
    SocialSciences = 3,
    /// 04 Business, administration and law
    BusinessLaw = 4,
    /// 05 Natural sciences, mathematics and statistics
    NaturalSciences = 5,
    /// 06 Information and communication technologies
    Ict = 6,
    /// 07 Engineering, manufacturing and construction
    Engineering = 7,
    /// 08 Agriculture, forestry, fisheries and veterinary
    Agriculture = 8,
    /// 09 Health and welfare
    HealthWelfare = 9,
    /// 10 Services
    Services = 10,
}

impl FieldGroup {
    /// Convert a numeric group id to a `FieldGroup`
    #[must_use]
    pub const fn from_u8(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Education),
            2 => Some(Self::ArtsHumanities),
            3 => Some(Self::SocialSciences),
            4 => Some(Self::BusinessLaw),
            5 => Some(Self::NaturalSciences),
            6 => Some(Self::Ict),
            7 => Some(Self::Engineering),
            8 => Some(Self::Agriculture),
            9 => Some(Self::HealthWelfare),
            10 => Some(Self::Services),
            _ => None,
        }
    }

    /// Numeric group id (1..=10)
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Get the display name for this group
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::ArtsHumanities => "Arts and humanities",
            Self::SocialSciences => "Social sciences, journalism and information",
            Self::BusinessLaw => "Business, administration and law",
            Self::NaturalSciences => "Natural sciences, mathematics and statistics",
            Self::Ict => "Information and communication technologies",
            Self::Engineering => "Engineering, manufacturing and construction",
            Self::Agriculture => "Agriculture, forestry, fisheries and veterinary",
            Self::HealthWelfare => "Health and welfare",
            Self::Services => "Services",
        }
    }

    /// All field groups in numeric order
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Education,
            Self::ArtsHumanities,
            Self::SocialSciences,
            Self::BusinessLaw,
            Self::NaturalSciences,
            Self::Ict,
            Self::Engineering,
            Self::Agriculture,
            Self::HealthWelfare,
            Self::Services,
        ]
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry of the ISCED-F detailed field catalogue
#[derive(Debug, Clone, Copy)]
pub struct IscedEntry {
    pub code: u16,
    pub label: &'static str,
    pub group: FieldGroup,
}

const fn entry(code: u16, label: &'static str, group: FieldGroup) -> IscedEntry {
    IscedEntry { code, label, group }
}

/// Every detailed ISCED-F code the rule table may assign
pub static ISCED_CATALOGUE: &[IscedEntry] = &[
    entry(111, "Education science", FieldGroup::Education),
    entry(112, "Training for pre-school teachers", FieldGroup::Education),
    entry(113, "Teacher training without subject specialisation", FieldGroup::Education),
    entry(114, "Teacher training with subject specialisation", FieldGroup::Education),
    entry(200, "Retail and personal services (stand-in)", FieldGroup::ArtsHumanities),
    entry(211, "Audio-visual techniques and media production", FieldGroup::ArtsHumanities),
    entry(212, "Fashion, interior and industrial design", FieldGroup::ArtsHumanities),
    entry(213, "Fine arts", FieldGroup::ArtsHumanities),
    entry(214, "Handicrafts", FieldGroup::ArtsHumanities),
    entry(215, "Music and performing arts", FieldGroup::ArtsHumanities),
    entry(221, "Religion and theology", FieldGroup::ArtsHumanities),
    entry(222, "History and archaeology", FieldGroup::ArtsHumanities),
    entry(223, "Philosophy and ethics", FieldGroup::ArtsHumanities),
    entry(231, "Language acquisition", FieldGroup::ArtsHumanities),
    entry(232, "Literature and linguistics", FieldGroup::ArtsHumanities),
    entry(311, "Economics", FieldGroup::SocialSciences),
    entry(313, "Psychology", FieldGroup::SocialSciences),
    entry(314, "Sociology and cultural studies", FieldGroup::SocialSciences),
    entry(321, "Journalism and reporting", FieldGroup::SocialSciences),
    entry(322, "Library, information and archival studies", FieldGroup::SocialSciences),
    entry(410, "Business and administration", FieldGroup::BusinessLaw),
    entry(411, "Accounting and taxation", FieldGroup::BusinessLaw),
    entry(412, "Finance, banking and insurance", FieldGroup::BusinessLaw),
    entry(413, "Management and administration", FieldGroup::BusinessLaw),
    entry(414, "Marketing and advertising", FieldGroup::BusinessLaw),
    entry(415, "Secretarial and office work", FieldGroup::BusinessLaw),
    entry(416, "Wholesale and retail sales", FieldGroup::BusinessLaw),
    entry(421, "Law", FieldGroup::BusinessLaw),
    entry(511, "Biology", FieldGroup::NaturalSciences),
    entry(512, "Biochemistry", FieldGroup::NaturalSciences),
    entry(521, "Environmental sciences", FieldGroup::NaturalSciences),
    entry(531, "Chemistry", FieldGroup::NaturalSciences),
    entry(532, "Earth sciences", FieldGroup::NaturalSciences),
    entry(533, "Physics", FieldGroup::NaturalSciences),
    entry(541, "Mathematics", FieldGroup::NaturalSciences),
    entry(542, "Statistics", FieldGroup::NaturalSciences),
    entry(611, "Computer use", FieldGroup::Ict),
    entry(612, "Database and network design and administration", FieldGroup::Ict),
    entry(613, "Software and applications development and analysis", FieldGroup::Ict),
    entry(710, "Engineering and engineering trades", FieldGroup::Engineering),
    entry(711, "Chemical engineering and processes", FieldGroup::Engineering),
    entry(712, "Environmental protection technology", FieldGroup::Engineering),
    entry(713, "Electricity and energy", FieldGroup::Engineering),
    entry(714, "Electronics and automation", FieldGroup::Engineering),
    entry(715, "Mechanics and metal trades", FieldGroup::Engineering),
    entry(716, "Motor vehicles, ships and aircraft", FieldGroup::Engineering),
    entry(721, "Food processing", FieldGroup::Engineering),
    entry(722, "Materials (glass, paper, plastic and wood)", FieldGroup::Engineering),
    entry(723, "Textiles (clothes, footwear and leather)", FieldGroup::Engineering),
    entry(724, "Mining and extraction", FieldGroup::Engineering),
    entry(731, "Architecture and town planning", FieldGroup::Engineering),
    entry(732, "Building and civil engineering", FieldGroup::Engineering),
    entry(811, "Crop and livestock production", FieldGroup::Agriculture),
    entry(812, "Horticulture", FieldGroup::Agriculture),
    entry(821, "Forestry", FieldGroup::Agriculture),
    entry(831, "Fisheries", FieldGroup::Agriculture),
    entry(841, "Veterinary", FieldGroup::Agriculture),
    entry(911, "Dental studies", FieldGroup::HealthWelfare),
    entry(912, "Medicine", FieldGroup::HealthWelfare),
    entry(913, "Nursing and midwifery", FieldGroup::HealthWelfare),
    entry(914, "Medical diagnostic and treatment technology", FieldGroup::HealthWelfare),
    entry(915, "Therapy and rehabilitation", FieldGroup::HealthWelfare),
    entry(916, "Pharmacy", FieldGroup::HealthWelfare),
    entry(921, "Care of the elderly and of disabled adults", FieldGroup::HealthWelfare),
    entry(922, "Child care and youth services", FieldGroup::HealthWelfare),
    entry(923, "Social work and counselling", FieldGroup::HealthWelfare),
    entry(1011, "Domestic services", FieldGroup::Services),
    entry(1012, "Hair and beauty services", FieldGroup::Services),
    entry(1013, "Hotel, restaurants and catering", FieldGroup::Services),
    entry(1014, "Sports", FieldGroup::Services),
    entry(1015, "Travel, tourism and leisure", FieldGroup::Services),
    entry(1021, "Community sanitation", FieldGroup::Services),
    entry(1031, "Military and defence", FieldGroup::Services),
    entry(1032, "Protection of persons and property", FieldGroup::Services),
    entry(1041, "Transport services", FieldGroup::Services),
];

/// A detailed 4-digit ISCED-F code
///
/// Stored without leading zeros (`0410` is `IscedCode(410)`); always
/// displayed zero-padded to four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IscedCode(pub(crate) u16);

impl IscedCode {
    /// Build a code, accepting only entries of the catalogue
    #[must_use]
    pub fn new(code: u16) -> Option<Self> {
        lookup_isced(code).map(|_| Self(code))
    }

    /// Numeric value of the code
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Catalogue entry of this code, if it is a catalogued code
    #[must_use]
    pub fn entry(self) -> Option<&'static IscedEntry> {
        lookup_isced(self.0)
    }

    /// Human readable field name
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().map_or("Uncatalogued field", |e| e.label)
    }
}

impl fmt::Display for IscedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

fn lookup_isced(code: u16) -> Option<&'static IscedEntry> {
    ISCED_CATALOGUE.iter().find(|e| e.code == code)
}

/// The result of classifying one occupation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailedCode {
    /// An ISCED-F detailed field
    Isced(IscedCode),
    /// Homemaker (-14)
    Homemaker,
    /// In education or vocational training (-10)
    InTraining,
    /// Unemployed or otherwise not working (-2)
    Unemployed,
    /// Respondent does not know (-8)
    DontKnow,
}

impl DetailedCode {
    pub const HOMEMAKER_CODE: i16 = -14;
    pub const IN_TRAINING_CODE: i16 = -10;
    pub const UNEMPLOYED_CODE: i16 = -2;
    pub const DONT_KNOW_CODE: i16 = -8;

    /// Construct an ISCED code for static tables; validity is checked by
    /// `RuleTable::validate`.
    #[must_use]
    pub(crate) const fn isced(code: u16) -> Self {
        Self::Isced(IscedCode(code))
    }

    /// Numeric representation used in output datasets
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            #[allow(clippy::cast_possible_wrap)]
            Self::Isced(code) => code.0 as i16,
            Self::Homemaker => Self::HOMEMAKER_CODE,
            Self::InTraining => Self::IN_TRAINING_CODE,
            Self::Unemployed => Self::UNEMPLOYED_CODE,
            Self::DontKnow => Self::DONT_KNOW_CODE,
        }
    }

    /// Parse the numeric representation back; unknown codes yield `None`
    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            Self::HOMEMAKER_CODE => Some(Self::Homemaker),
            Self::IN_TRAINING_CODE => Some(Self::InTraining),
            Self::UNEMPLOYED_CODE => Some(Self::Unemployed),
            Self::DONT_KNOW_CODE => Some(Self::DontKnow),
            c if c > 0 => u16::try_from(c).ok().and_then(IscedCode::new).map(Self::Isced),
            _ => None,
        }
    }

    /// Whether this is a non-occupation sentinel
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Self::Isced(_))
    }

    /// Every code in the enumeration: the catalogue followed by the sentinels
    #[must_use]
    pub fn all() -> Vec<Self> {
        ISCED_CATALOGUE
            .iter()
            .map(|e| Self::isced(e.code))
            .chain([
                Self::Homemaker,
                Self::InTraining,
                Self::Unemployed,
                Self::DontKnow,
            ])
            .collect()
    }

    /// Get the display name for this code
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Isced(code) => code.label(),
            Self::Homemaker => "Homemaker",
            Self::InTraining => "In training",
            Self::Unemployed => "Unemployed",
            Self::DontKnow => "Don't know",
        }
    }
}

impl fmt::Display for DetailedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isced(code) => write!(f, "{code}"),
            other => write!(f, "{}", other.code()),
        }
    }
}

/// The six aggregated categories of the closed-ended survey question,
/// plus the three non-occupation sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category6 {
    /// 1: education, health and social services
    EducationHealthSocial,
    /// 2: services and retail
    ServicesRetail,
    /// 3: business, administration and law
    BusinessAdministrationLaw,
    /// 4: natural sciences, computing, engineering and construction
    ScienceTechnology,
    /// 5: social sciences, journalism, arts and humanities
    SocialSciencesArts,
    /// 6: agriculture, forestry, fisheries and veterinary medicine
    Agriculture,
    /// -14: homemaker
    Homemaker,
    /// -2: unemployed
    Unemployed,
    /// -8: don't know
    DontKnow,
}

impl Category6 {
    /// Convert a numeric survey code to a `Category6`
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::EducationHealthSocial),
            2 => Some(Self::ServicesRetail),
            3 => Some(Self::BusinessAdministrationLaw),
            4 => Some(Self::ScienceTechnology),
            5 => Some(Self::SocialSciencesArts),
            6 => Some(Self::Agriculture),
            -14 => Some(Self::Homemaker),
            -2 => Some(Self::Unemployed),
            -8 => Some(Self::DontKnow),
            _ => None,
        }
    }

    /// Numeric survey code
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::EducationHealthSocial => 1,
            Self::ServicesRetail => 2,
            Self::BusinessAdministrationLaw => 3,
            Self::ScienceTechnology => 4,
            Self::SocialSciencesArts => 5,
            Self::Agriculture => 6,
            Self::Homemaker => -14,
            Self::Unemployed => -2,
            Self::DontKnow => -8,
        }
    }

    /// Canonical label shared by both surveys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EducationHealthSocial => "Bildung, Gesundheit und Soziales",
            Self::ServicesRetail => "Dienstleistungen und Detailhandel",
            Self::BusinessAdministrationLaw => "Wirtschaft, Verwaltung und Recht",
            Self::ScienceTechnology => "Naturwissenschaften, Informatik, Technik und Bau",
            Self::SocialSciencesArts => {
                "Sozialwissenschaften, Journalismus, Kunst und Geisteswissenschaften"
            }
            Self::Agriculture => "Landwirtschaft, Forstwirtschaft, Fischerei und Tiermedizin",
            Self::Homemaker => "Hausfrau/Hausmann",
            Self::Unemployed => "Arbeitslos",
            Self::DontKnow => "Weiss nicht",
        }
    }

    /// Whether this is one of the non-occupation sentinels
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Homemaker | Self::Unemployed | Self::DontKnow)
    }

    /// All categories in canonical display order (occupations first)
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::EducationHealthSocial,
            Self::ServicesRetail,
            Self::BusinessAdministrationLaw,
            Self::ScienceTechnology,
            Self::SocialSciencesArts,
            Self::Agriculture,
            Self::Homemaker,
            Self::Unemployed,
            Self::DontKnow,
        ]
    }
}

impl fmt::Display for Category6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
