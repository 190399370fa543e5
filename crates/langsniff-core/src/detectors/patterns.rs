//! Syntactic fingerprints for each candidate language.
//!
//! Every predicate here is pure and independent of the others; precedence
//! between overlapping languages is decided by rule order in
//! [`rules`](super::rules), not inside the predicates. Patterns are compiled
//! once on first use and shared read-only afterwards.

use regex::Regex;
use serde::de::IgnoredAny;
use std::sync::OnceLock;

// Static patterns initialized once
static DOCKERFILE_INSTRUCTION: OnceLock<Regex> = OnceLock::new();
static KDL_NODE_OPEN: OnceLock<Regex> = OnceLock::new();
static KDL_LITERAL: OnceLock<Regex> = OnceLock::new();
static KDL_CHILD_STRING: OnceLock<Regex> = OnceLock::new();
static SEMICOLON_LINE_END: OnceLock<Regex> = OnceLock::new();
static APACHE_TAG: OnceLock<Regex> = OnceLock::new();
static APACHE_DIRECTIVE: OnceLock<Regex> = OnceLock::new();
static NGINX_BLOCK: OnceLock<Regex> = OnceLock::new();
static JSON_SHAPE: OnceLock<Regex> = OnceLock::new();
static SYSTEMD_SECTION: OnceLock<Regex> = OnceLock::new();
static SYSTEMD_ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
static DOTENV_ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
static BRACKET_LINE_START: OnceLock<Regex> = OnceLock::new();
static TOML_TABLE_HEADER: OnceLock<Regex> = OnceLock::new();
static TOML_ASSIGNMENT: OnceLock<Regex> = OnceLock::new();
static SQL_STATEMENT: OnceLock<Regex> = OnceLock::new();
static NIX_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static NIX_LAMBDA_HEADER: OnceLock<Regex> = OnceLock::new();
static YAML_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static STATEMENT_TERMINATED_LINE: OnceLock<Regex> = OnceLock::new();
static JAVASCRIPT_PATTERN: OnceLock<Regex> = OnceLock::new();
static PYTHON_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

/// Dockerfile instructions recognised at the start of a line.
pub const DOCKERFILE_INSTRUCTIONS: &[&str] = &[
    "FROM",
    "MAINTAINER",
    "RUN",
    "CMD",
    "LABEL",
    "EXPOSE",
    "ENV",
    "ADD",
    "COPY",
    "ENTRYPOINT",
    "VOLUME",
    "USER",
    "WORKDIR",
    "ARG",
    "ONBUILD",
    "HEALTHCHECK",
    "SHELL",
];

/// systemd unit section names.
pub const SYSTEMD_SECTIONS: &[&str] = &[
    "Unit", "Service", "Install", "Socket", "Timer", "Mount", "Path", "Scope", "Slice",
];

// ============================================================================
// Shared helpers
// ============================================================================

fn semicolon_line_end() -> &'static Regex {
    SEMICOLON_LINE_END.get_or_init(|| Regex::new(r"(?m);[ \t\r]*$").unwrap())
}

fn apache_tag() -> &'static Regex {
    APACHE_TAG.get_or_init(|| {
        Regex::new(r"(?i)<(?:VirtualHost|DirectoryMatch|Directory|Files|Location|IfModule)\b")
            .unwrap()
    })
}

/// Returns true if any line ends in a `;` statement terminator.
pub fn has_semicolon_line_end(sample: &str) -> bool {
    semicolon_line_end().is_match(sample)
}

/// Returns true if the sample contains an Apache container tag.
pub fn has_apache_tag(sample: &str) -> bool {
    apache_tag().is_match(sample)
}

// ============================================================================
// Config formats
// ============================================================================

pub fn is_dockerfile(sample: &str) -> bool {
    DOCKERFILE_INSTRUCTION
        .get_or_init(|| {
            let pattern = format!(r"(?m)^(?:{})\s+", DOCKERFILE_INSTRUCTIONS.join("|"));
            Regex::new(&pattern).unwrap()
        })
        .is_match(sample)
}

/// KDL: a node opening a child block, plus KDL-only literals or a
/// `name "value"` child, with no `;`-terminated lines.
///
/// Node arguments are limited to KDL values (strings, bare words,
/// `key=value` properties), so `function f(x) {` is not a node.
pub fn is_kdl(sample: &str) -> bool {
    let node_open = KDL_NODE_OPEN.get_or_init(|| {
        Regex::new(concat!(
            r#"(?m)^[ \t]*(?:[A-Za-z_][\w.-]*|\*|"[^"\n]*")"#,
            r#"(?:[ \t]+(?:"[^"\n]*"|[\w.-]+=(?:"[^"\n]*"|#?[\w.-]+)|#?[\w.-]+))*"#,
            r"[ \t]*\{",
        ))
        .unwrap()
    });
    if !node_open.is_match(sample) {
        return false;
    }

    let literal = KDL_LITERAL.get_or_init(|| Regex::new(r"#(?:true|false|null)\b").unwrap());
    let child = KDL_CHILD_STRING
        .get_or_init(|| Regex::new(r#"(?m)^[ \t]*[A-Za-z_][\w.-]*[ \t]+"[^"\n]*""#).unwrap());

    (literal.is_match(sample) || child.is_match(sample)) && !has_semicolon_line_end(sample)
}

pub fn is_apache(sample: &str) -> bool {
    let directive = APACHE_DIRECTIVE.get_or_init(|| {
        Regex::new(
            r"(?im)^[ \t]*(?:ServerName|DocumentRoot|RewriteEngine|RewriteRule|LoadModule)\s+",
        )
        .unwrap()
    });
    has_apache_tag(sample) || directive.is_match(sample)
}

/// Nginx block or directive at line start, rejected when an Apache tag is
/// present (`location` vs `<Location>`).
pub fn is_nginx(sample: &str) -> bool {
    let block = NGINX_BLOCK.get_or_init(|| {
        Regex::new(r"(?im)^[ \t]*(?:server|location|upstream|worker_processes)(?:\s*[{;]|\s+)")
            .unwrap()
    });
    block.is_match(sample) && !has_apache_tag(sample)
}

/// JSON is decided by shape alone. The strict parse only feeds the trace log;
/// malformed documents that look like JSON are still JSON.
pub fn is_json(sample: &str) -> bool {
    let shape = JSON_SHAPE.get_or_init(|| Regex::new(r#"\A\s*[\[{]\s*""#).unwrap());
    if !shape.is_match(sample) {
        return false;
    }

    match serde_json::from_str::<IgnoredAny>(sample) {
        Ok(_) => tracing::trace!("sample parses as strict JSON"),
        Err(e) => tracing::trace!(error = %e, "JSON-shaped sample failed strict parse"),
    }
    true
}

pub fn is_systemd(sample: &str) -> bool {
    let section = SYSTEMD_SECTION.get_or_init(|| {
        let pattern = format!(r"(?m)^[ \t]*\[(?:{})\]", SYSTEMD_SECTIONS.join("|"));
        Regex::new(&pattern).unwrap()
    });
    let assignment =
        SYSTEMD_ASSIGNMENT.get_or_init(|| Regex::new(r"(?m)^[A-Za-z0-9_-]+[ \t]*=").unwrap());
    section.is_match(sample) && assignment.is_match(sample)
}

/// `UPPER_SNAKE=value` lines with no braces, semicolons, or section headers.
pub fn is_dotenv(sample: &str) -> bool {
    let assignment = DOTENV_ASSIGNMENT
        .get_or_init(|| Regex::new(r"(?m)^[A-Z_][A-Z0-9_]*[ \t]*=[ \t]*\S").unwrap());
    let bracket_line =
        BRACKET_LINE_START.get_or_init(|| Regex::new(r"(?m)^[ \t]*\[").unwrap());

    assignment.is_match(sample)
        && !sample.contains(&['{', '}', ';'][..])
        && !bracket_line.is_match(sample)
}

pub fn is_toml(sample: &str) -> bool {
    let header = TOML_TABLE_HEADER
        .get_or_init(|| Regex::new(r"(?m)^[ \t]*\[[ \t]*[\w.-]+[ \t]*\]").unwrap());
    let assignment = TOML_ASSIGNMENT
        .get_or_init(|| Regex::new(r"(?m)^[A-Za-z0-9_-]+[ \t]*=[ \t]*\S").unwrap());
    header.is_match(sample) || assignment.is_match(sample)
}

// ============================================================================
// Query and expression languages
// ============================================================================

/// Statement keywords, case-insensitive. `SELECT`/`UPDATE` must reach their
/// `FROM`/`SET` within the same statement.
pub fn is_sql(sample: &str) -> bool {
    SQL_STATEMENT
        .get_or_init(|| {
            Regex::new(concat!(
                r"(?i)\bSELECT\b[^;]+?\bFROM\b",
                r"|\bINSERT\s+INTO\b",
                r"|\bUPDATE\b[^;]+?\bSET\b",
                r"|\bDELETE\s+FROM\b",
                r"|\b(?:CREATE|ALTER|DROP)\s+TABLE\b",
            ))
            .unwrap()
        })
        .is_match(sample)
}

/// A module lambda header at line start whose formals include `...` or one
/// of `config`/`lib`/`pkgs`. A bare `{ a, b }:` is a Python set too.
fn has_nix_module_header(sample: &str) -> bool {
    NIX_LAMBDA_HEADER
        .get_or_init(|| {
            Regex::new(r"(?m)^[ \t]*\{(?P<formals>\s*[\w-]+(?:\s*,\s*[\w-]+)*(?:\s*,\s*\.\.\.)?\s*)\}\s*:")
                .unwrap()
        })
        .captures_iter(sample)
        .any(|caps| {
            caps["formals"]
                .split(',')
                .map(str::trim)
                .any(|formal| matches!(formal, "..." | "config" | "lib" | "pkgs"))
        })
}

pub fn is_nix(sample: &str) -> bool {
    let idioms = NIX_PATTERNS.get_or_init(|| {
        vec![
            // Attribute sets referencing the package set
            Regex::new(r"\{[^}]*\bpkgs\b").unwrap(),
            // Module system helpers
            Regex::new(r"\b(?:mkIf|mkMerge|mkOverride)\b|\bbuiltins\.\w").unwrap(),
            // let ... in
            Regex::new(r"(?s)\blet\b.*?;\s*in\b").unwrap(),
        ]
    });

    has_nix_module_header(sample) || idioms.iter().any(|p| p.is_match(sample))
}

// ============================================================================
// YAML
// ============================================================================

fn statement_terminated_line() -> &'static Regex {
    // `;` closing a line, optionally followed by a closing brace (CSS rules,
    // one-line C-style blocks)
    STATEMENT_TERMINATED_LINE.get_or_init(|| Regex::new(r"(?m);[ \t]*\}?[ \t\r]*$").unwrap())
}

pub fn is_yaml(sample: &str) -> bool {
    let mapping = YAML_PATTERNS.get_or_init(|| {
        vec![
            // key: or key: &anchor
            Regex::new(r"(?m)^[ \t]*[\w.-]+[ \t]*:(?:[ \t]+&[\w-]+)?[ \t\r]*$").unwrap(),
            // - item
            Regex::new(r"(?m)^[ \t]*-[ \t]+\S").unwrap(),
            // key: value
            Regex::new(r"(?m)^[ \t]*\w[\w .-]*:[ \t]+\S").unwrap(),
        ]
    });

    mapping.iter().any(|p| p.is_match(sample)) && !statement_terminated_line().is_match(sample)
}

// ============================================================================
// Programming languages
// ============================================================================

pub fn is_javascript(sample: &str) -> bool {
    JAVASCRIPT_PATTERN
        .get_or_init(|| {
            Regex::new(concat!(
                r"\b(?:const|let|var)\s+[\w$\[{]",
                r"|\bfunction\b\s*[\w$]*\s*\(",
                r"|=>",
                r"|\bdocument\.[\w$]",
                r"|\bconsole\.log\(",
            ))
            .unwrap()
        })
        .is_match(sample)
}

pub fn is_python(sample: &str) -> bool {
    PYTHON_PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?m)^[ \t]*def[ \t]+\w+").unwrap(),
                Regex::new(r"(?m)^[ \t]*import[ \t]+\w").unwrap(),
                Regex::new(r"(?m)^[ \t]*from[ \t]+[\w.]+[ \t]+import\b").unwrap(),
                Regex::new(r"\bprint\(").unwrap(),
                Regex::new(r"\bwith[ \t]+open\(|\bwith[ \t]+[^\n:]+?[ \t]+as[ \t]+\w+").unwrap(),
                Regex::new(r"\bif[ \t]+__name__[ \t]*==").unwrap(),
                Regex::new(r"(?m)^[ \t]*elif\b").unwrap(),
                Regex::new(r"\byield\b").unwrap(),
                Regex::new(r"(?m)^[ \t]*pass[ \t\r]*$").unwrap(),
                Regex::new(r"\b(?:True|False|None)\b").unwrap(),
                // a if cond else b
                Regex::new(r"\S[ \t]+if[ \t]+[^\n:]+?[ \t]+else[ \t]+[^\s:]").unwrap(),
                // [x for x in xs]
                Regex::new(r"\[[^\[\]\n]+?[ \t]+for[ \t]+[\w, ]+?[ \t]+in[ \t]+[^\]\n]+\]").unwrap(),
                Regex::new(r"\.(?:write|join)\(").unwrap(),
            ]
        })
        .iter()
        .any(|p| p.is_match(sample))
}
