//! The occupation rule table
//!
//! Rules are substring patterns grouped into named blocks, one target code
//! per block, and the blocks are grouped into tiers. The table is scanned
//! front to back and the last matching rule decides, so the declaration
//! order below is part of the classification contract:
//!
//! 1. Generic overrides: broad, ambiguous stems ("leiter", "verwalt",
//!    "techniker") that almost always need refining.
//! 2. Non-occupation markers: don't-know, unemployed, in-training and
//!    homemaker answers.
//! 3. Domain blocks: the detailed ISCED-F vocabulary, roughly in field
//!    order, with a few blocks moved so that a more specific block follows
//!    the broader one it refines.
//! 4. Catch-all overrides: compounds that an earlier block would otherwise
//!    misfile ("tierarzt" after "arzt", "kindergärtner" after "gärtner",
//!    "metallbauer" and "holzbauer" after "bauer", "biologielehrer" after
//!    "biolog").
//!
//! Patterns are literal lowercase surface forms. Spelling variants
//! ("köchin"/"koechin", "ä"/"ae") are listed explicitly.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::codes::{DetailedCode, IscedCode};

/// Semantic tier of a rule block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleTier {
    GenericOverride,
    NonOccupation,
    Domain,
    CatchAllOverride,
}

impl RuleTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenericOverride => "generic_override",
            Self::NonOccupation => "non_occupation",
            Self::Domain => "domain",
            Self::CatchAllOverride => "catch_all_override",
        }
    }
}

impl fmt::Display for RuleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of patterns sharing one target code
#[derive(Debug, Clone, Copy)]
pub struct RuleBlock {
    pub name: &'static str,
    pub tier: RuleTier,
    pub code: DetailedCode,
    pub patterns: &'static [&'static str],
}

/// A single (pattern, code) rule at a fixed position of the table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    pub target_code: DetailedCode,
    /// Index of the owning block in declaration order
    pub block_order: usize,
    /// Index of the rule in the flattened table
    pub position: usize,
}

impl Rule {
    /// Whether the rule fires for the given normalized text
    #[inline]
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.pattern)
    }
}

/// Problems found by [`RuleTable::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleIssue {
    /// A pattern that matches every text
    EmptyPattern { position: usize },
    /// A pattern with uppercase characters can never match normalized text
    NotLowercase { position: usize, pattern: String },
    /// Target code is not part of the ISCED catalogue
    UnknownCode { position: usize, code: u16 },
    /// The same pattern with the same code appears twice
    DuplicateRule {
        first: usize,
        second: usize,
        pattern: String,
    },
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPattern { position } => write!(f, "rule {position}: empty pattern"),
            Self::NotLowercase { position, pattern } => {
                write!(f, "rule {position}: pattern '{pattern}' is not lowercase")
            }
            Self::UnknownCode { position, code } => {
                write!(f, "rule {position}: code {code:04} is not in the ISCED catalogue")
            }
            Self::DuplicateRule {
                first,
                second,
                pattern,
            } => write!(f, "rules {first} and {second}: duplicate rule for '{pattern}'"),
        }
    }
}

/// Result of validating a rule table
#[derive(Debug, Clone, Default)]
pub struct RuleTableReport {
    pub issues: Vec<RuleIssue>,
    /// Pairs of positions where the same pattern is declared again with a
    /// different code; the later one always wins
    pub shadowed: Vec<(usize, usize)>,
}

impl RuleTableReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Ordered, immutable rule table
#[derive(Debug, Clone)]
pub struct RuleTable {
    blocks: Vec<RuleBlock>,
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from blocks, preserving their order
    #[must_use]
    pub fn from_blocks(blocks: &[RuleBlock]) -> Self {
        let mut rules = Vec::with_capacity(blocks.iter().map(|b| b.patterns.len()).sum());
        for (block_order, block) in blocks.iter().enumerate() {
            for pattern in block.patterns {
                rules.push(Rule {
                    pattern,
                    target_code: block.code,
                    block_order,
                    position: rules.len(),
                });
            }
        }
        Self {
            blocks: blocks.to_vec(),
            rules,
        }
    }

    /// The built-in occupation rule table
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<RuleTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::from_blocks(OCCUPATION_RULE_BLOCKS))
    }

    /// All rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// All blocks in declaration order
    #[must_use]
    pub fn blocks(&self) -> &[RuleBlock] {
        &self.blocks
    }

    /// Block owning a rule
    #[must_use]
    pub fn block_of(&self, rule: &Rule) -> &RuleBlock {
        &self.blocks[rule.block_order]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check the table for rules that can never behave as intended
    #[must_use]
    pub fn validate(&self) -> RuleTableReport {
        let mut report = RuleTableReport::default();
        let mut seen: FxHashMap<&str, Vec<&Rule>> = FxHashMap::default();

        for rule in &self.rules {
            if rule.pattern.is_empty() {
                report.issues.push(RuleIssue::EmptyPattern {
                    position: rule.position,
                });
            } else if rule.pattern.to_lowercase() != rule.pattern {
                report.issues.push(RuleIssue::NotLowercase {
                    position: rule.position,
                    pattern: rule.pattern.to_string(),
                });
            }

            if let DetailedCode::Isced(code) = rule.target_code {
                if IscedCode::new(code.value()).is_none() {
                    report.issues.push(RuleIssue::UnknownCode {
                        position: rule.position,
                        code: code.value(),
                    });
                }
            }

            let earlier = seen.entry(rule.pattern).or_default();
            for previous in earlier.iter() {
                if previous.target_code == rule.target_code {
                    report.issues.push(RuleIssue::DuplicateRule {
                        first: previous.position,
                        second: rule.position,
                        pattern: rule.pattern.to_string(),
                    });
                } else {
                    report.shadowed.push((previous.position, rule.position));
                }
            }
            earlier.push(rule);
        }

        report
    }
}

const fn block(
    name: &'static str,
    tier: RuleTier,
    code: DetailedCode,
    patterns: &'static [&'static str],
) -> RuleBlock {
    RuleBlock {
        name,
        tier,
        code,
        patterns,
    }
}

use self::RuleTier::{CatchAllOverride, Domain, GenericOverride, NonOccupation};
use super::codes::DetailedCode as D;

/// The occupation rule catalogue, in evaluation order
pub static OCCUPATION_RULE_BLOCKS: &[RuleBlock] = &[
    // Tier 1: generic overrides
    block("generic_leadership", GenericOverride, D::isced(410), &[
        "leiter", "leitung", "chef", "manager", "management", "direktor", "geschäft",
        "geschaeft", "inhaber", "kader", "firma", "unternehm", "business", "selbständig",
        "selbstständig", "selbstaendig", "selbststaendig",
    ]),
    block("generic_administration", GenericOverride, D::isced(413), &[
        "verwalt", "administra", "sachbearbeit", "beamter", "beamtin", "öffentlicher dienst",
        "oeffentlicher dienst", "staatsangestellt",
    ]),
    block("generic_office", GenericOverride, D::isced(415), &[
        "büro", "buero", "kaufm", "kauffrau", "kfm", "assistent",
    ]),
    block("generic_engineering", GenericOverride, D::isced(710), &[
        "ingenieur", "techniker", "engineer", "technisch", "konstrukteur",
    ]),
    // Tier 2: non-occupation markers
    block("dont_know", NonOccupation, D::DontKnow, &[
        "weiss nicht", "weiß nicht", "weis nicht", "keine ahnung", "unbekannt", "keine angabe",
        "k.a.", "nicht bekannt", "verstorben", "kein kontakt", "?",
    ]),
    block("unemployed", NonOccupation, D::Unemployed, &[
        "arbeitslos", "arbeitsuchend", "arbeitssuchend", "erwerbslos", "ohne arbeit",
        "keine arbeit", "ohne job", "kein job", "ohne beruf", "kein beruf", "iv-rente",
        "iv rente", "invalid", "rentner", "pensioniert", "ruhestand", "sozialhilfe", "krank",
    ]),
    block("in_training", NonOccupation, D::InTraining, &[
        "student", "studiert", "studium", "in ausbildung", "lehrling", "lernende",
        "umschulung", "praktikant", "praktikum", "auszubildend", "azubi",
    ]),
    block("homemaker", NonOccupation, D::Homemaker, &[
        "hausfrau", "hausfr", "hausmann", "haushalt", "familie", "mutter", "zuhause",
        "zu hause", "daheim",
    ]),
    // Tier 3: domain blocks
    block("general_teaching", Domain, D::isced(113), &[
        "lehrer", "lehrperson", "lehrkraft", "primarlehr", "dozent", "unterricht",
    ]),
    block("education_science", Domain, D::isced(111), &[
        "pädagog", "paedagog", "erziehungswissenschaft", "schulleiter", "schulleitung",
        "schulrektor", "prorektor", "schulvorsteher",
    ]),
    block("preschool_teaching", Domain, D::isced(112), &[
        "kindergarten", "kiga", "vorschul", "spielgruppe",
    ]),
    block("subject_teaching", Domain, D::isced(114), &[
        "sekundarlehr", "reallehr", "gymnasiallehr", "gymilehr", "berufsschullehr",
        "kantonsschullehr", "fachlehr", "sportlehr", "turnlehr", "sprachlehr", "deutschlehr",
        "englischlehr", "französischlehr", "mathelehr", "mathematiklehr", "musiklehr",
        "werklehr", "handarbeitslehr", "heilpädagog", "heilpaedagog", "professor",
    ]),
    block("retail_and_services", Domain, D::isced(200), &[
        "verkäufer", "verkaeufer", "verkauf", "detailhandel", "detailhändler",
        "detailhaendler", "einzelhandel", "einzelhändler", "kassier", "kiosk", "ladenbesitz",
        "ladeninhab", "ladenangestellt", "migros", "coop", "denner", "lidl", "volg", "filial",
        "boutique", "shop", "tankstelle", "buchhändler", "buchhaendler", "verkaufsberat",
    ]),
    block("media_production", Domain, D::isced(211), &[
        "fotograf", "photograph", "kameramann", "kamerafrau", "mediamatik", "polygraf",
        "polygraph", "drucker", "tontechnik", "video", "filmemacher", "filmproduktion",
        "regisseur", "grafiker", "graphiker", "mediengestalt", "medienproduktion",
    ]),
    block("design", Domain, D::isced(212), &[
        "designer", "design", "dekorat", "gestalter", "schaufenster",
    ]),
    block("fine_arts", Domain, D::isced(213), &[
        "künstler", "kuenstler", "bildhauer", "illustrat", "kunstschaff",
    ]),
    block("handicrafts", Domain, D::isced(214), &[
        "uhrmacher", "schmuck", "keramik", "töpfer", "toepfer",
        "geigenbau", "orgelbau", "instrumentenbau", "kunsthandwerk", "glasbläser",
        "glasblaeser", "korbflecht", "vergolder",
    ]),
    block("performing_arts", Domain, D::isced(215), &[
        "musiker", "sänger", "saenger", "schauspiel", "tänzer", "taenzer", "dirigent",
        "pianist", "komponist", "organist", "kantor", "artist", "zirkus", "theater",
    ]),
    block("religion", Domain, D::isced(221), &[
        "pfarrer", "pastor", "priester", "theolog", "diakon", "katechet", "imam", "seelsorge",
        "pfarrei", "rabbiner", "mönch", "nonne",
    ]),
    block("history", Domain, D::isced(222), &[
        "historiker", "archäolog", "archaeolog", "museum", "kurator",
    ]),
    block("philosophy", Domain, D::isced(223), &["philosoph", "ethiker"]),
    block("languages", Domain, D::isced(231), &[
        "übersetz", "uebersetz", "dolmetsch", "translator",
    ]),
    block("literature", Domain, D::isced(232), &[
        "schriftsteller", "buchautor", "autorin", "lektor", "germanist", "linguist",
        "literatur", "sprachwissenschaft",
    ]),
    block("economics", Domain, D::isced(311), &[
        "ökonom", "oekonom", "volkswirt", "wirtschaftswissenschaft",
    ]),
    block("psychology", Domain, D::isced(313), &["psycholog"]),
    block("sociology", Domain, D::isced(314), &[
        "soziolog", "ethnolog", "anthropolog", "politolog", "politikwissenschaft",
        "kulturwissenschaft", "geograf", "geograph", "politiker", "gemeinderat", "stadtrat",
        "nationalrat", "kantonsrat", "gemeindepräsident", "bürgermeister", "diplomat",
    ]),
    block("journalism", Domain, D::isced(321), &[
        "journalist", "redakt", "reporter", "moderator", "korrespondent", "verleger", "verlag",
        "texter", "pressesprech",
    ]),
    block("library_archives", Domain, D::isced(322), &[
        "bibliothek", "archivar", "dokumentalist",
    ]),
    block("finance", Domain, D::isced(412), &[
        "bank", "finanz", "versicherung", "treasur", "anlageberat", "vermögensverwalt",
        "vermoegensverwalt", "broker", "trader", "kredit", "krankenkasse", "pensionskasse",
        "börse", "boerse", "ubs", "credit suisse", "raiffeisen", "postfinance", "fondsmanag",
        "portfolio",
    ]),
    block("accounting", Domain, D::isced(411), &[
        "buchhalt", "treuhand", "steuerberat", "steuerexpert", "revisor", "wirtschaftsprüf",
        "wirtschaftspruef", "controller", "controlling", "rechnungswesen", "buchführ",
        "steueramt", "steuerverwalt",
    ]),
    block("management", Domain, D::isced(413), &[
        "betriebswirt", "betriebsökonom", "betriebsoekonom", "personal", "human resources",
        "hr-fach", "hr-berat", "hr-spezial", "hr-manag", "projektleit", "projektmanag",
        "unternehmensberat", "consultant", "consulting", "organisationsentwickl",
        "qualitätsmanag", "qualitaetsmanag", "geschäftsführ", "geschaeftsfuehr", "ceo",
        "gemeindeschreiber", "stadtschreiber", "ratsschreiber",
    ]),
    block("marketing", Domain, D::isced(414), &[
        "marketing", "werbung", "werbefach", "werbeagentur", "werbetexter",
        "public relations", "kommunikationsfach", "kommunikationsberat",
        "kommunikationsspezial", "social media", "eventmanag", "marktforsch", "produktmanag",
    ]),
    block("secretarial", Domain, D::isced(415), &[
        "sekretär", "sekretaer", "sekretariat", "empfang", "rezeption", "telefonist",
        "bürofach", "office", "administrativ", "schreibkraft", "personalassist",
    ]),
    block("sales_and_trade", Domain, D::isced(416), &[
        "einkäufer", "einkaeufer", "einkauf", "grosshandel", "großhandel", "handelsfirma",
        "handelsvertret", "handelsreisend", "import", "export", "aussendienst", "außendienst",
        "vertrieb", "vertreter", "key account", "sales", "immobilien", "makler", "autohändler",
        "autohaendler", "weinhändler", "kunsthändler", "kundendienst", "kundenberat",
    ]),
    block("law", Domain, D::isced(421), &[
        "jurist", "anwalt", "anwält", "advokat", "richter", "notar", "gerichts",
        "rechtsberat", "paralegal", "rechtsabteilung", "justiz",
    ]),
    block("biology", Domain, D::isced(511), &[
        "biolog", "labor", "genetik", "zoolog", "botanik", "naturwissenschaft",
    ]),
    block("biochemistry", Domain, D::isced(512), &[
        "biotechnolog", "molekularbiolog", "pharmaforsch", "life science",
    ]),
    block("environmental_science", Domain, D::isced(521), &[
        "umweltwissenschaft", "ökolog", "oekolog", "naturschutz", "umweltschutz",
        "umweltberat", "klimaforsch",
    ]),
    block("chemistry", Domain, D::isced(531), &["chemiker", "chemielaborant", "chemie"]),
    block("earth_sciences", Domain, D::isced(532), &[
        "geolog", "meteorolog", "geophysik", "hydrolog", "glaziolog", "vermessung", "geomatik",
    ]),
    block("physics", Domain, D::isced(533), &[
        "physiker", "astronom", "astrophysik", "kernphysik",
    ]),
    block("mathematics", Domain, D::isced(541), &["mathematiker"]),
    block("statistics", Domain, D::isced(542), &[
        "statistik", "aktuar", "data scientist", "datenanalyst", "datenanalytik",
        "versicherungsmathemat",
    ]),
    block("software", Domain, D::isced(613), &[
        "informatik", "software", "programmier", "applikationsentwickl", "webentwickl",
        "webdesign", "webprogramm", "app-entwickl", "it-projektleit", "it-berat",
        "it-consult", "it-fach", "it-spezial", "it-mitarbeit", "it-branche", "in der it",
    ]),
    block("computer_use", Domain, D::isced(611), &[
        "computer", "edv", "pc-support", "it-support", "it support", "helpdesk",
        "ict-support", "informatikanwend",
    ]),
    block("network_administration", Domain, D::isced(612), &[
        "netzwerk", "systemadministr", "sysadmin", "systemtechnik", "datenbank",
        "it-infrastruktur", "rechenzentrum",
    ]),
    block("chemical_engineering", Domain, D::isced(711), &[
        "chemikant", "verfahrenstechn", "chemieingenieur", "pharma", "chemische industrie",
        "prozesstechn",
    ]),
    block("environmental_technology", Domain, D::isced(712), &[
        "umwelttechn", "umweltingenieur", "kläranlag", "klaeranlag", "wasserversorg",
        "recycling", "abwasser", "wassertechn",
    ]),
    block("electricity_energy", Domain, D::isced(713), &[
        "elektriker", "elektro", "energie", "strom", "kraftwerk", "solar", "netzelektr",
        "elektrizität", "photovoltaik", "kernkraft", "atomkraft",
    ]),
    block("electronics_automation", Domain, D::isced(714), &[
        "elektronik", "automatik", "automation", "mechatronik", "robotik", "mikrotechn",
        "steuerungstechn", "messtechn", "regeltechn",
    ]),
    block("mechanics_metal", Domain, D::isced(715), &[
        "mechanik", "schlosser", "schweiss", "schweiß", "metall", "maschinenbau",
        "maschineningenieur", "maschinist", "dreher", "fräser", "fraeser", "spengler",
        "schmied", "werkzeugmach", "anlagenführer", "anlagenfuehrer", "fabrik",
        "produktionsmitarbeit", "produktionsarbeit", "maschinenführer", "maschinenfuehrer",
        "einrichter", "giesser", "gießer", "stahlbau", "schleifer",
    ]),
    block("motor_vehicles", Domain, D::isced(716), &[
        "automechanik", "automobil", "autoelektrik", "fahrzeug", "karosser", "carrosser",
        "autolackier", "flugzeug", "zweirad", "velomechanik", "motorrad", "garage",
        "automonteur", "pneu", "landmaschinenmechanik", "nutzfahrzeug", "schiffbau", "bootbau",
        "reifen",
    ]),
    block("food_processing", Domain, D::isced(721), &[
        "bäcker", "baecker", "konditor", "confiseur", "metzger", "fleischfach", "fleischer",
        "käser", "kaeser", "molker", "lebensmitteltechn", "lebensmittelindustrie",
        "lebensmittelproduktion", "brauer", "chocolatier", "schokolade", "milchtechnolog",
    ]),
    block("materials", Domain, D::isced(722), &[
        "schreiner", "tischler", "zimmermann", "zimmerer", "holz", "glaser", "kunststoff",
        "papier", "drechsler", "säger", "saeger", "möbel", "moebel", "parkett", "innenausbau",
    ]),
    block("textiles", Domain, D::isced(723), &[
        "schneider", "näher", "naeher", "textil", "schuhmacher", "sattler", "polsterer",
        "kürschner", "kuerschner", "weber", "bekleidung", "gerber", "modist",
    ]),
    block("mining", Domain, D::isced(724), &[
        "bergbau", "bergwerk", "steinbruch", "mineur", "bergmann", "sprengmeister",
    ]),
    block("architecture", Domain, D::isced(731), &[
        "architekt", "raumplan", "stadtplan", "zeichner",
    ]),
    block("construction", Domain, D::isced(732), &[
        "bauarbeiter", "baustelle", "bauführer", "baufuehrer", "bauleiter", "bauingenieur",
        "bauunternehm", "hochbau", "tiefbau", "strassenbau", "straßenbau", "gleisbau",
        "gerüstbau", "geruestbau", "maurer", "gipser", "maler", "plattenleger", "bodenleger",
        "dachdecker", "sanitär", "sanitaer", "heizung", "lüftung", "lueftung", "polier",
        "bauhandwerk", "baugewerbe", "baufirma", "bauamt", "bauverwalt", "gebäudetechn",
        "gebaeudetechn", "isolier", "fassadenbau",
    ]),
    block("crops_and_livestock", Domain, D::isced(811), &[
        "landwirt", "bauer", "bäuerin", "baeuerin", "agronom", "winzer", "weinbau",
        "tierhalt", "viehz", "milchwirtschaft", "älpler", "aelpler", "hirte", "schäfer",
        "schaefer", "agrar", "gutsbesitz", "pferdewirt", "imker", "geflügelz", "landarbeit",
    ]),
    block("horticulture", Domain, D::isced(812), &[
        "gärtner", "gaertner", "gartenbau", "florist", "blumen", "baumschul", "obstbau",
    ]),
    block("forestry", Domain, D::isced(821), &[
        "förster", "foerster", "forst", "holzfäller", "holzfaeller", "waldarbeit",
    ]),
    block("fisheries", Domain, D::isced(831), &["fischer", "fischzucht"]),
    block("veterinary", Domain, D::isced(841), &["veterinär", "veterinaer", "tierheim"]),
    block("health_general", Domain, D::isced(914), &[
        "arzt", "ärzt", "aerzt", "praxisassistent", "radiolog", "röntgen", "roentgen",
        "medizintechn", "medizinisch-techn", "biomedizinische analytik", "rettungssanit",
        "sanitäter", "sanitaeter", "optiker", "akustiker", "orthopädietechn",
        "orthopaedietechn", "spital", "klinik", "krankenhaus", "doktor", "gesundheit",
        "medizinisch",
    ]),
    block("medicine", Domain, D::isced(912), &[
        "mediziner", "chirurg", "psychiater", "oberarzt", "oberärzt", "chefarzt", "chefärzt",
        "assistenzarzt", "assistenzärzt", "kardiolog", "gynäkolog", "gynaekolog", "anästhes",
        "anaesthes", "internist", "onkolog", "neurolog", "urolog", "dermatolog", "hausarzt",
        "hausärzt", "kinderarzt", "kinderärzt", "augenarzt", "augenärzt", "allgemeinmedizin",
        "humanmedizin", "pädiater", "paediater", "orthopäde", "orthopaede", "notarzt",
        "notärzt", "facharzt", "fachärzt",
    ]),
    block("dental", Domain, D::isced(911), &[
        "zahnarzt", "zahnärzt", "zahnaerzt", "dental", "zahntechn", "kieferorthopäd",
        "kieferorthopaed", "zahnmedizin", "prophylaxe",
    ]),
    block("nursing", Domain, D::isced(913), &[
        "pflege", "krankenschwester", "hebamme", "fage", "fachfrau gesundheit",
        "fachmann gesundheit", "spitex", "nurse",
    ]),
    block("therapy", Domain, D::isced(915), &[
        "physio", "ergotherap", "logopäd", "logopaed", "therapeut", "osteopath", "masseur",
        "masseuse", "massage", "chiropraktik", "ernährungsberat", "ernaehrungsberat",
        "podolog", "heilpraktik", "psychomotor", "aktivierungsfach",
    ]),
    block("pharmacy", Domain, D::isced(916), &[
        "apotheke", "pharmazeut", "pharmaassist", "drogist", "drogerie", "pharmakolog",
    ]),
    block("elderly_and_disabled_care", Domain, D::isced(921), &[
        "altenpfleg", "altersheim", "altenheim", "alterspfleg", "altersbetreu",
        "betagtenbetreu", "seniorenbetreu", "behindertenbetreu", "behindertenbegleit",
        "behindertenheim", "betreuer", "fabe", "fachperson betreuung", "pflegeheim",
        "altersresidenz", "wohnheim", "heimleit",
    ]),
    block("childcare_and_youth", Domain, D::isced(922), &[
        "kinderbetreu", "krippe", "kita", "kinderhort", "tagesmutter", "tagesvater",
        "tageseltern", "nanny", "kinderpfleg", "jugendarbeit", "kleinkinderzieh",
        "kindererzieh", "erzieher", "au-pair", "au pair", "jugendbetreu", "babysitter",
        "kinderfrau", "jugendleit",
    ]),
    block("social_work", Domain, D::isced(923), &[
        "sozialarbeit", "sozialpädagog", "sozialpaedagog", "sozialbegleit", "sozialberat",
        "sozialdienst", "soziale arbeit", "sozialamt", "beistand", "berufsberat",
        "laufbahnberat", "familienhelfer", "familienbegleit", "familienberat", "streetwork",
        "opferhilfe", "suchtberat", "integrationsfach", "asylbetreu", "flüchtlingsbetreu",
        "kesb",
    ]),
    block("domestic_services", Domain, D::isced(1011), &[
        "reinigung", "putzfrau", "putzmann", "putzkraft", "putzhilfe", "raumpfleg",
        "hauswirtschaft", "haushaltshilfe", "haushälter", "haushaelter", "hauspersonal",
        "zimmermädchen", "zimmermaedchen", "wäscherei", "waescherei", "hausdienst",
        "hausangestellt",
    ]),
    block("hair_and_beauty", Domain, D::isced(1012), &[
        "coiffeur", "coiffeuse", "coiffure", "friseur", "frisör", "frisoer", "kosmetik",
        "visagist", "maskenbildner", "fusspfleg", "fußpfleg", "körperpfleg", "koerperpfleg",
        "make-up", "barbier", "stylist", "nagel", "beauty",
    ]),
    block("hospitality", Domain, D::isced(1013), &[
        "koch", "köchin", "koechin", "küche", "kueche", "gastro", "restaurant", "hotel",
        "kellner", "servicefach", "servicemitarbeit", "serviceangestellt", "servicekraft",
        "serviertochter", "barkeeper", "barmaid", "bartender", "barista", "gastwirt", "beizer",
        "catering", "kantine", "mensa", "cafe", "café", "pizzaiolo", "sous-chef", "wirtshaus",
        "restauration", "gastgewerbe", "abwäscher",
    ]),
    block("sports", Domain, D::isced(1014), &[
        "sportler", "fitness", "trainer", "skilehr", "snowboardlehr", "bergführer",
        "bergfuehrer", "bademeister", "schwimmlehr", "tennislehr", "golflehr", "reitlehr",
        "fussballer", "profisport", "yoga", "pilates", "jockey",
    ]),
    block("travel_and_tourism", Domain, D::isced(1015), &[
        "reiseb", "reiseleit", "reiseverkehr", "reiseveranstalt", "tourismus", "touristik",
        "flugbegleit", "steward", "kabinenpersonal", "freizeit", "animateur", "animator",
        "veranstaltungs", "eventfach", "bergbahn", "seilbahn",
    ]),
    block("sanitation", Domain, D::isced(1021), &[
        "entsorg", "abfall", "kehricht", "müllabfuhr", "muellabfuhr", "müllmann", "muellmann",
        "strassenreinig", "straßenreinig", "stadtreinig", "hauswart", "abwart", "facility",
        "kaminfeger", "schornsteinfeger", "schädlingsbekämpf", "schaedlingsbekaempf",
        "hausmeister",
    ]),
    block("military", Domain, D::isced(1031), &[
        "militär", "militaer", "soldat", "offizier", "armee", "bundeswehr", "kaserne",
    ]),
    block("protection", Domain, D::isced(1032), &[
        "polizist", "polizei", "sicherheit", "security", "securitas", "wachmann", "bewachung",
        "feuerwehr", "grenzwach", "grenzwächter", "grenzwaechter", "zollbeamt", "zollfahnd",
        "zöllner", "zoellner", "detektiv", "gefängnis", "gefaengnis", "justizvollzug",
        "strafvollzug", "aufseher", "personenschutz", "objektschutz", "wachdienst",
        "brandschutz",
    ]),
    block("transport", Domain, D::isced(1041), &[
        "transport", "chauffeur", "fahrer", "taxi", "lokführer", "lokfuehrer",
        "lokomotivführer", "lokomotivfuehrer", "pilot", "kapitän", "kapitaen", "matrose",
        "logistik", "lager", "pöstler", "poestler", "briefträger", "brieftraeger", "postbote",
        "paketbote", "kurier", "zusteller", "sbb", "disponent", "spedit", "fahrlehrer",
        "zugbegleit", "fluglotse", "umzug", "schiffsführer", "postauto", "kranführer",
        "kranfuehrer", "eisenbahn", "bahnhof", "rangier",
    ]),
    // Tier 4: catch-all overrides
    block("veterinary_overrides", CatchAllOverride, D::isced(841), &[
        "tierarzt", "tierärzt", "tieraerzt", "tiermedizin", "tierpfleg", "tierklinik",
        "tierbetreu", "hufschmied", "hufpfleg",
    ]),
    block("preschool_overrides", CatchAllOverride, D::isced(112), &[
        "kindergärtner", "kindergaertner",
    ]),
    block("teaching_overrides", CatchAllOverride, D::isced(114), &[
        "hauswirtschaftslehr", "biologielehr", "chemielehr", "physiklehr", "informatiklehr",
        "geschichtslehr", "geografielehr", "geographielehr", "naturkundelehr",
        "wirtschaftslehr", "religionslehr", "zeichenlehr", "italienischlehr",
    ]),
    block("handicraft_overrides", CatchAllOverride, D::isced(214), &[
        "goldschmied", "silberschmied", "orgelbauer", "geigenbauer", "instrumentenbauer",
        "klavierbauer", "holzbildhauer",
    ]),
    block("fine_art_overrides", CatchAllOverride, D::isced(213), &["kunstmaler"]),
    block("design_overrides", CatchAllOverride, D::isced(212), &[
        "innenarchitekt", "inneneinricht",
    ]),
    block("psychology_overrides", CatchAllOverride, D::isced(313), &["psychotherap"]),
    block("journalism_overrides", CatchAllOverride, D::isced(321), &["berichterstatt"]),
    block("biochemistry_overrides", CatchAllOverride, D::isced(512), &["biochemi"]),
    block("ict_security_overrides", CatchAllOverride, D::isced(612), &[
        "it-sicherheit", "it-security", "it security", "informatiksicherheit", "cyber",
    ]),
    block("customer_service_overrides", CatchAllOverride, D::isced(416), &["kundenbetreu"]),
    block("architecture_overrides", CatchAllOverride, D::isced(731), &["bauzeichner"]),
    block("construction_trade_overrides", CatchAllOverride, D::isced(732), &[
        "strassenbauer", "straßenbauer", "gleisbauer", "gerüstbauer", "geruestbauer",
        "fassadenbauer", "tunnelbauer", "kaminbauer", "ofenbauer", "hochbauer", "tiefbauer",
        "brunnenbauer", "heizungsbauer", "brückenbauer", "brueckenbauer", "wasserbauer",
    ]),
    block("metal_trade_overrides", CatchAllOverride, D::isced(715), &[
        "metallbauer", "maschinenbauer", "stahlbauer", "werkzeugbauer", "apparatebauer",
        "formenbauer", "anlagenbauer",
    ]),
    block("vehicle_trade_overrides", CatchAllOverride, D::isced(716), &[
        "schiffbauer", "bootbauer", "fahrzeugbauer", "karosseriebauer", "carrosseriebauer",
        "flugzeugbauer", "fahrradbauer", "velobauer",
    ]),
    block("materials_overrides", CatchAllOverride, D::isced(722), &[
        "küchenbau", "kuechenbau", "holzbauer", "modellbauer", "möbelbauer", "moebelbauer",
        "fensterbauer", "treppenbauer",
    ]),
    block("horticulture_overrides", CatchAllOverride, D::isced(812), &[
        "gartenpfleg", "grünpfleg", "gruenpfleg", "gemüsebau", "gemuesebau",
        "landschaftsbauer",
    ]),
    block("social_work_overrides", CatchAllOverride, D::isced(923), &["heilsarmee"]),
];
