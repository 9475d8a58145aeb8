//! Identifier case conversion between Rust/Go-style names and GraphQL wire
//! names.
//!
//! GraphQL field names are lowerCamelCase on the wire. Result-shape structs
//! use Rust `snake_case` fields (and schema type names use `MixedCaps`), so
//! both directions need to agree on where identifier segments begin and end —
//! in particular for multi-letter initialisms: `DatabaseID` is the two
//! segments `Database`+`ID` and becomes `databaseId`, never `databaseI`+`d`.

/// Initialisms preserved as single segments, in Mixed Caps style.
///
/// Read-only and sorted: lookup is a binary search over the uppercased
/// segment.
const INITIALISMS: &[&str] = &[
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UTF8", "UUID", "VM", "XML", "XSRF", "XSS",
];

fn is_initialism(segment: &str) -> bool {
    let upper = segment.to_ascii_uppercase();
    INITIALISMS.binary_search(&upper.as_str()).is_ok()
}

/// Convert an identifier in `MixedCaps`, `lowerCamelCase`, or `snake_case`
/// form to its lowerCamelCase GraphQL wire name.
///
/// ```
/// use octoql::ident::to_wire_name;
///
/// assert_eq!(to_wire_name("DatabaseID"), "databaseId");
/// assert_eq!(to_wire_name("created_at"), "createdAt");
/// assert_eq!(to_wire_name("URL"), "url");
/// ```
///
/// Total over any input; the empty string maps to itself.
pub fn to_wire_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    for (i, segment) in segments(identifier).iter().enumerate() {
        if i == 0 {
            out.extend(segment.chars().flat_map(char::to_lowercase));
        } else {
            push_capitalized(&mut out, segment);
        }
    }
    out
}

/// Convert a lowerCamelCase wire name back to Mixed Caps form, fully
/// capitalizing initialism segments: `clientMutationId` becomes
/// `ClientMutationID`.
pub fn to_mixed_caps(wire_name: &str) -> String {
    let mut out = String::with_capacity(wire_name.len());
    for segment in segments(wire_name) {
        if is_initialism(&segment) {
            out.extend(segment.chars().flat_map(char::to_uppercase));
        } else {
            push_capitalized(&mut out, &segment);
        }
    }
    out
}

/// First character uppercased, the rest lowercased.
fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

/// Split an identifier into its segments.
///
/// Boundaries: `_` (dropped), a lowercase letter or digit followed by an
/// uppercase letter, and the last letter of an uppercase run that precedes a
/// lowercase letter (`HTTPSConn` is `HTTPS`+`Conn`). Digits attach to the
/// current segment, so `UTF8` stays whole. An uppercase run that is not a
/// known initialism is split per letter, matching how such names read on the
/// wire (`XYField` is `xYField`, but `IDField` is `idField`).
fn segments(identifier: &str) -> Vec<String> {
    let chars: Vec<char> = identifier.chars().collect();
    let mut raw = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !current.is_empty() {
                raw.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            let prev = chars[i - 1];
            let upper_run_ends = prev.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            let case_transition = (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
            if case_transition || upper_run_ends {
                raw.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        raw.push(current);
    }

    let mut out = Vec::with_capacity(raw.len());
    for segment in raw {
        let is_upper_run = segment.chars().count() > 1
            && segment.chars().all(|c| c.is_uppercase() || c.is_ascii_digit());
        if is_upper_run {
            split_upper_run(&segment, &mut out);
        } else {
            out.push(segment);
        }
    }
    out
}

/// Split an uppercase run into initialism chunks, longest match first, and
/// single letters for whatever remains: `HTMLURL` is `HTML`+`URL`, `XY` is
/// `X`+`Y`.
fn split_upper_run(run: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = run.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let chunk = (i + 2..=chars.len())
            .rev()
            .map(|j| chars[i..j].iter().collect::<String>())
            .find(|candidate| is_initialism(candidate));
        match chunk {
            Some(initialism) => {
                i += initialism.chars().count();
                out.push(initialism);
            }
            None => {
                out.push(chars[i].to_string());
                i += 1;
            }
        }
    }
}
