//! Static category data.
//!
//! Mirrors <https://arxiv.org/category_taxonomy>. Archives are listed in
//! taxonomy order; members keep the order of the listing.

use arxivql::{Category, CategoryGroup, WildcardRule};

/// Number of archives in [`ARCHIVES`].
pub const ARCHIVE_COUNT: usize = 20;

macro_rules! categories {
    ($group:literal, $archive_id:literal, $archive_name:literal; $($id:literal => $name:literal),+ $(,)?) => {
        &[$(Category::new($id, $name, $group, $archive_id, $archive_name)),+]
    };
}

const CS: &[Category] = categories!(
    "Computer Science", "cs", "Computer Science";
    "cs.AI" => "Artificial Intelligence",
    "cs.AR" => "Hardware Architecture",
    "cs.CC" => "Computational Complexity",
    "cs.CE" => "Computational Engineering, Finance, and Science",
    "cs.CG" => "Computational Geometry",
    "cs.CL" => "Computation and Language",
    "cs.CR" => "Cryptography and Security",
    "cs.CV" => "Computer Vision and Pattern Recognition",
    "cs.CY" => "Computers and Society",
    "cs.DB" => "Databases",
    "cs.DC" => "Distributed, Parallel, and Cluster Computing",
    "cs.DL" => "Digital Libraries",
    "cs.DM" => "Discrete Mathematics",
    "cs.DS" => "Data Structures and Algorithms",
    "cs.ET" => "Emerging Technologies",
    "cs.FL" => "Formal Languages and Automata Theory",
    "cs.GL" => "General Literature",
    "cs.GR" => "Graphics",
    "cs.GT" => "Computer Science and Game Theory",
    "cs.HC" => "Human-Computer Interaction",
    "cs.IR" => "Information Retrieval",
    "cs.IT" => "Information Theory",
    "cs.LG" => "Machine Learning",
    "cs.LO" => "Logic in Computer Science",
    "cs.MA" => "Multiagent Systems",
    "cs.MM" => "Multimedia",
    "cs.MS" => "Mathematical Software",
    "cs.NA" => "Numerical Analysis",
    "cs.NE" => "Neural and Evolutionary Computing",
    "cs.NI" => "Networking and Internet Architecture",
    "cs.OH" => "Other Computer Science",
    "cs.OS" => "Operating Systems",
    "cs.PF" => "Performance",
    "cs.PL" => "Programming Languages",
    "cs.RO" => "Robotics",
    "cs.SC" => "Symbolic Computation",
    "cs.SD" => "Sound",
    "cs.SE" => "Software Engineering",
    "cs.SI" => "Social and Information Networks",
    "cs.SY" => "Systems and Control",
);

const ECON: &[Category] = categories!(
    "Economics", "econ", "Economics";
    "econ.EM" => "Econometrics",
    "econ.GN" => "General Economics",
    "econ.TH" => "Theoretical Economics",
);

const EESS: &[Category] = categories!(
    "Electrical Engineering and Systems Science", "eess", "Electrical Engineering and Systems Science";
    "eess.AS" => "Audio and Speech Processing",
    "eess.IV" => "Image and Video Processing",
    "eess.SP" => "Signal Processing",
    "eess.SY" => "Systems and Control",
);

const MATH: &[Category] = categories!(
    "Mathematics", "math", "Mathematics";
    "math.AC" => "Commutative Algebra",
    "math.AG" => "Algebraic Geometry",
    "math.AP" => "Analysis of PDEs",
    "math.AT" => "Algebraic Topology",
    "math.CA" => "Classical Analysis and ODEs",
    "math.CO" => "Combinatorics",
    "math.CT" => "Category Theory",
    "math.CV" => "Complex Variables",
    "math.DG" => "Differential Geometry",
    "math.DS" => "Dynamical Systems",
    "math.FA" => "Functional Analysis",
    "math.GM" => "General Mathematics",
    "math.GN" => "General Topology",
    "math.GR" => "Group Theory",
    "math.GT" => "Geometric Topology",
    "math.HO" => "History and Overview",
    "math.IT" => "Information Theory",
    "math.KT" => "K-Theory and Homology",
    "math.LO" => "Logic",
    "math.MG" => "Metric Geometry",
    "math.MP" => "Mathematical Physics",
    "math.NA" => "Numerical Analysis",
    "math.NT" => "Number Theory",
    "math.OA" => "Operator Algebras",
    "math.OC" => "Optimization and Control",
    "math.PR" => "Probability",
    "math.QA" => "Quantum Algebra",
    "math.RA" => "Rings and Algebras",
    "math.RT" => "Representation Theory",
    "math.SG" => "Symplectic Geometry",
    "math.SP" => "Spectral Theory",
    "math.ST" => "Statistics Theory",
);

const Q_BIO: &[Category] = categories!(
    "Quantitative Biology", "q-bio", "Quantitative Biology";
    "q-bio.BM" => "Biomolecules",
    "q-bio.CB" => "Cell Behavior",
    "q-bio.GN" => "Genomics",
    "q-bio.MN" => "Molecular Networks",
    "q-bio.NC" => "Neurons and Cognition",
    "q-bio.OT" => "Other Quantitative Biology",
    "q-bio.PE" => "Populations and Evolution",
    "q-bio.QM" => "Quantitative Methods",
    "q-bio.SC" => "Subcellular Processes",
    "q-bio.TO" => "Tissues and Organs",
);

const Q_FIN: &[Category] = categories!(
    "Quantitative Finance", "q-fin", "Quantitative Finance";
    "q-fin.CP" => "Computational Finance",
    "q-fin.EC" => "Economics",
    "q-fin.GN" => "General Finance",
    "q-fin.MF" => "Mathematical Finance",
    "q-fin.PM" => "Portfolio Management",
    "q-fin.PR" => "Pricing of Securities",
    "q-fin.RM" => "Risk Management",
    "q-fin.ST" => "Statistical Finance",
    "q-fin.TR" => "Trading and Market Microstructure",
);

const STAT: &[Category] = categories!(
    "Statistics", "stat", "Statistics";
    "stat.AP" => "Applications",
    "stat.CO" => "Computation",
    "stat.ME" => "Methodology",
    "stat.ML" => "Machine Learning",
    "stat.OT" => "Other Statistics",
    "stat.TH" => "Statistics Theory",
);

const ASTRO_PH: &[Category] = categories!(
    "Physics", "astro-ph", "Astrophysics";
    "astro-ph" => "Astrophysics",
    "astro-ph.CO" => "Cosmology and Nongalactic Astrophysics",
    "astro-ph.EP" => "Earth and Planetary Astrophysics",
    "astro-ph.GA" => "Astrophysics of Galaxies",
    "astro-ph.HE" => "High Energy Astrophysical Phenomena",
    "astro-ph.IM" => "Instrumentation and Methods for Astrophysics",
    "astro-ph.SR" => "Solar and Stellar Astrophysics",
);

const COND_MAT: &[Category] = categories!(
    "Physics", "cond-mat", "Condensed Matter";
    "cond-mat" => "Condensed Matter",
    "cond-mat.dis-nn" => "Disordered Systems and Neural Networks",
    "cond-mat.mes-hall" => "Mesoscale and Nanoscale Physics",
    "cond-mat.mtrl-sci" => "Materials Science",
    "cond-mat.other" => "Other Condensed Matter",
    "cond-mat.quant-gas" => "Quantum Gases",
    "cond-mat.soft" => "Soft Condensed Matter",
    "cond-mat.stat-mech" => "Statistical Mechanics",
    "cond-mat.str-el" => "Strongly Correlated Electrons",
    "cond-mat.supr-con" => "Superconductivity",
);

const NLIN: &[Category] = categories!(
    "Physics", "nlin", "Nonlinear Sciences";
    "nlin.AO" => "Adaptation and Self-Organizing Systems",
    "nlin.CD" => "Chaotic Dynamics",
    "nlin.CG" => "Cellular Automata and Lattice Gases",
    "nlin.PS" => "Pattern Formation and Solitons",
    "nlin.SI" => "Exactly Solvable and Integrable Systems",
);

const PHYSICS: &[Category] = categories!(
    "Physics", "physics", "Physics";
    "physics.acc-ph" => "Accelerator Physics",
    "physics.ao-ph" => "Atmospheric and Oceanic Physics",
    "physics.app-ph" => "Applied Physics",
    "physics.atm-clus" => "Atomic and Molecular Clusters",
    "physics.atom-ph" => "Atomic Physics",
    "physics.bio-ph" => "Biological Physics",
    "physics.chem-ph" => "Chemical Physics",
    "physics.class-ph" => "Classical Physics",
    "physics.comp-ph" => "Computational Physics",
    "physics.data-an" => "Data Analysis, Statistics and Probability",
    "physics.ed-ph" => "Physics Education",
    "physics.flu-dyn" => "Fluid Dynamics",
    "physics.gen-ph" => "General Physics",
    "physics.geo-ph" => "Geophysics",
    "physics.hist-ph" => "History and Philosophy of Physics",
    "physics.ins-det" => "Instrumentation and Detectors",
    "physics.med-ph" => "Medical Physics",
    "physics.optics" => "Optics",
    "physics.plasm-ph" => "Plasma Physics",
    "physics.pop-ph" => "Popular Physics",
    "physics.soc-ph" => "Physics and Society",
    "physics.space-ph" => "Space Physics",
);

const GR_QC: &[Category] = categories!(
    "Physics", "gr-qc", "General Relativity and Quantum Cosmology";
    "gr-qc" => "General Relativity and Quantum Cosmology",
);

const HEP_EX: &[Category] = categories!(
    "Physics", "hep-ex", "High Energy Physics - Experiment";
    "hep-ex" => "High Energy Physics - Experiment",
);

const HEP_LAT: &[Category] = categories!(
    "Physics", "hep-lat", "High Energy Physics - Lattice";
    "hep-lat" => "High Energy Physics - Lattice",
);

const HEP_PH: &[Category] = categories!(
    "Physics", "hep-ph", "High Energy Physics - Phenomenology";
    "hep-ph" => "High Energy Physics - Phenomenology",
);

const HEP_TH: &[Category] = categories!(
    "Physics", "hep-th", "High Energy Physics - Theory";
    "hep-th" => "High Energy Physics - Theory",
);

const MATH_PH: &[Category] = categories!(
    "Physics", "math-ph", "Mathematical Physics";
    "math-ph" => "Mathematical Physics",
);

const NUCL_EX: &[Category] = categories!(
    "Physics", "nucl-ex", "Nuclear Experiment";
    "nucl-ex" => "Nuclear Experiment",
);

const NUCL_TH: &[Category] = categories!(
    "Physics", "nucl-th", "Nuclear Theory";
    "nucl-th" => "Nuclear Theory",
);

const QUANT_PH: &[Category] = categories!(
    "Physics", "quant-ph", "Quantum Physics";
    "quant-ph" => "Quantum Physics",
);

/// Every archive, in taxonomy order.
///
/// Multi-category archives match with a wildcard; `astro-ph` and `cond-mat`
/// also carry a general category without a dot, so they use `id*`.
pub static ARCHIVES: [CategoryGroup; ARCHIVE_COUNT] = [
    CategoryGroup::new("cs", "Computer Science", CS, WildcardRule::DotWildcard),
    CategoryGroup::new("econ", "Economics", ECON, WildcardRule::DotWildcard),
    CategoryGroup::new("eess", "Electrical Engineering and Systems Science", EESS, WildcardRule::DotWildcard),
    CategoryGroup::new("math", "Mathematics", MATH, WildcardRule::DotWildcard),
    CategoryGroup::new("q-bio", "Quantitative Biology", Q_BIO, WildcardRule::DotWildcard),
    CategoryGroup::new("q-fin", "Quantitative Finance", Q_FIN, WildcardRule::DotWildcard),
    CategoryGroup::new("stat", "Statistics", STAT, WildcardRule::DotWildcard),
    CategoryGroup::new("astro-ph", "Astrophysics", ASTRO_PH, WildcardRule::StarWildcard),
    CategoryGroup::new("cond-mat", "Condensed Matter", COND_MAT, WildcardRule::StarWildcard),
    CategoryGroup::new("nlin", "Nonlinear Sciences", NLIN, WildcardRule::DotWildcard),
    CategoryGroup::new("physics", "Physics", PHYSICS, WildcardRule::DotWildcard),
    CategoryGroup::new("gr-qc", "General Relativity and Quantum Cosmology", GR_QC, WildcardRule::SingleToken),
    CategoryGroup::new("hep-ex", "High Energy Physics - Experiment", HEP_EX, WildcardRule::SingleToken),
    CategoryGroup::new("hep-lat", "High Energy Physics - Lattice", HEP_LAT, WildcardRule::SingleToken),
    CategoryGroup::new("hep-ph", "High Energy Physics - Phenomenology", HEP_PH, WildcardRule::SingleToken),
    CategoryGroup::new("hep-th", "High Energy Physics - Theory", HEP_TH, WildcardRule::SingleToken),
    CategoryGroup::new("math-ph", "Mathematical Physics", MATH_PH, WildcardRule::SingleToken),
    CategoryGroup::new("nucl-ex", "Nuclear Experiment", NUCL_EX, WildcardRule::SingleToken),
    CategoryGroup::new("nucl-th", "Nuclear Theory", NUCL_TH, WildcardRule::SingleToken),
    CategoryGroup::new("quant-ph", "Quantum Physics", QUANT_PH, WildcardRule::SingleToken),
];
