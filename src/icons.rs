//! Icon registry for skill and service records

/// Icon identifiers the portfolio renders.
///
/// Records store the wire name (`"FaReact"`, `"SiMongodb"`, ...). Drafts are
/// checked against this registry at data-entry time with [`IconId::parse`];
/// stored data that predates the check still renders through
/// [`IconId::resolve`], which falls back to the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    /// Generic code glyph, the fallback for unknown names
    Code,
    React,
    NodeJs,
    JavaScript,
    TypeScript,
    Html5,
    Css3,
    TailwindCss,
    Express,
    MongoDb,
    MySql,
    PostgreSql,
    Database,
    Git,
    GitHub,
    Docker,
    Java,
    Python,
    Figma,
    Server,
    Tools,
}

impl IconId {
    /// Icon used when a stored name is not in the registry
    pub const DEFAULT: IconId = IconId::Code;

    /// Every registered icon
    pub const ALL: &'static [IconId] = &[
        IconId::Code,
        IconId::React,
        IconId::NodeJs,
        IconId::JavaScript,
        IconId::TypeScript,
        IconId::Html5,
        IconId::Css3,
        IconId::TailwindCss,
        IconId::Express,
        IconId::MongoDb,
        IconId::MySql,
        IconId::PostgreSql,
        IconId::Database,
        IconId::Git,
        IconId::GitHub,
        IconId::Docker,
        IconId::Java,
        IconId::Python,
        IconId::Figma,
        IconId::Server,
        IconId::Tools,
    ];

    /// Wire name stored in record `icon` fields
    pub fn name(&self) -> &'static str {
        match self {
            IconId::Code => "FaCode",
            IconId::React => "FaReact",
            IconId::NodeJs => "FaNodeJs",
            IconId::JavaScript => "SiJavascript",
            IconId::TypeScript => "SiTypescript",
            IconId::Html5 => "SiHtml5",
            IconId::Css3 => "SiCss3",
            IconId::TailwindCss => "SiTailwindcss",
            IconId::Express => "SiExpress",
            IconId::MongoDb => "SiMongodb",
            IconId::MySql => "SiMysql",
            IconId::PostgreSql => "SiPostgresql",
            IconId::Database => "FaDatabase",
            IconId::Git => "FaGitAlt",
            IconId::GitHub => "FaGithub",
            IconId::Docker => "FaDocker",
            IconId::Java => "FaJava",
            IconId::Python => "FaPython",
            IconId::Figma => "FaFigma",
            IconId::Server => "FaServer",
            IconId::Tools => "FaTools",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            IconId::Code => "Code",
            IconId::React => "React",
            IconId::NodeJs => "Node.js",
            IconId::JavaScript => "JavaScript",
            IconId::TypeScript => "TypeScript",
            IconId::Html5 => "HTML5",
            IconId::Css3 => "CSS3",
            IconId::TailwindCss => "Tailwind CSS",
            IconId::Express => "Express",
            IconId::MongoDb => "MongoDB",
            IconId::MySql => "MySQL",
            IconId::PostgreSql => "PostgreSQL",
            IconId::Database => "Database",
            IconId::Git => "Git",
            IconId::GitHub => "GitHub",
            IconId::Docker => "Docker",
            IconId::Java => "Java",
            IconId::Python => "Python",
            IconId::Figma => "Figma",
            IconId::Server => "Server",
            IconId::Tools => "Tools",
        }
    }

    /// Look up a wire name, strictly
    pub fn parse(name: &str) -> Option<IconId> {
        IconId::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// Look up a wire name, falling back to the default icon
    pub fn resolve(name: &str) -> IconId {
        IconId::parse(name).unwrap_or(IconId::DEFAULT)
    }
}
