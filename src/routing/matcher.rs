//! Shape matching for GitHub download paths.
//!
//! # Responsibilities
//! - Describe the four supported URL shapes as an ordered table
//! - Match the part of the path after the routing prefix against one shape
//! - Expand the shape's URL template into the upstream URL
//!
//! # Design Decisions
//! - No regex: each pattern is a fixed list of segment matchers
//! - Captured values borrow from the request path
//! - First match wins (table order is the dispatch order)

/// The URL family a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `<owner>/<repo>/releases/download/<tag>/<file...>`
    ReleaseDownload,
    /// `<owner>/<repo>@<tag>/<file...>`
    ShortVersion,
    /// `<owner>/<repo>/blob/<ref>/<file...>`
    Blob,
    /// `<owner>/<repo>/raw/<ref>/<file...>`
    Raw,
}

impl Shape {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::ReleaseDownload => "release_download",
            Shape::ShortVersion => "short_version",
            Shape::Blob => "blob",
            Shape::Raw => "raw",
        }
    }

    /// Whether the forwarder checks the asset exists before relaying it.
    ///
    /// Only release downloads are probed; every other shape is relayed as-is.
    pub fn probe_policy(&self) -> ProbePolicy {
        match self {
            Shape::ReleaseDownload => ProbePolicy::ProbeFirst,
            Shape::ShortVersion | Shape::Blob | Shape::Raw => ProbePolicy::Direct,
        }
    }
}

/// How the forwarder treats a matched shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbePolicy {
    /// Fetch once to check for a 2xx status, then fetch again to relay.
    ProbeFirst,
    /// Relay the first fetch directly.
    Direct,
}

/// A successful match. All fields borrow from the inbound path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub shape: Shape,
    pub owner: &'a str,
    pub repo: &'a str,
    /// Tag for release and short-version shapes, branch/commit/tag otherwise.
    pub reference: &'a str,
    /// Everything after the last fixed segment, may contain `/`.
    pub file: &'a str,
}

/// Upstream hosts substituted into `{github}` and `{raw}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamBases {
    pub github: String,
    pub raw: String,
}

impl Default for UpstreamBases {
    fn default() -> Self {
        Self {
            github: "https://github.com".to_string(),
            raw: "https://raw.githubusercontent.com".to_string(),
        }
    }
}

/// One pattern element. Each consumes exactly one non-empty path segment.
#[derive(Debug, Clone, Copy)]
enum Segment {
    Owner,
    Repo,
    Ref,
    /// `<repo>@<ref>`, split at the last `@`.
    RepoAtRef,
    Literal(&'static str),
}

/// A `(pattern, shape, template)` entry of the dispatch table.
#[derive(Debug)]
pub struct ShapeRule {
    pub shape: Shape,
    pattern: &'static [Segment],
    template: &'static str,
}

/// Dispatch table, evaluated in order.
pub static SHAPES: [ShapeRule; 4] = [
    ShapeRule {
        shape: Shape::ReleaseDownload,
        pattern: &[
            Segment::Owner,
            Segment::Repo,
            Segment::Literal("releases"),
            Segment::Literal("download"),
            Segment::Ref,
        ],
        template: "{github}/{owner}/{repo}/releases/download/{ref}/{file}",
    },
    ShapeRule {
        shape: Shape::ShortVersion,
        pattern: &[Segment::Owner, Segment::RepoAtRef],
        template: "{github}/{owner}/{repo}/raw/refs/tags/{ref}/{file}",
    },
    ShapeRule {
        shape: Shape::Blob,
        pattern: &[Segment::Owner, Segment::Repo, Segment::Literal("blob"), Segment::Ref],
        template: "{raw}/{owner}/{repo}/{ref}/{file}",
    },
    ShapeRule {
        shape: Shape::Raw,
        pattern: &[Segment::Owner, Segment::Repo, Segment::Literal("raw"), Segment::Ref],
        template: "{raw}/{owner}/{repo}/{ref}/{file}",
    },
];

impl ShapeRule {
    /// Match `path` (the text after the routing prefix, no leading `/`).
    ///
    /// With `strict_names`, owner, repo and ref must pass [`is_valid_name`].
    pub fn matches<'a>(&self, path: &'a str, strict_names: bool) -> Option<RouteMatch<'a>> {
        let mut owner = "";
        let mut repo = "";
        let mut reference = "";
        let mut rest = path;

        for segment in self.pattern {
            let (head, tail) = rest.split_once('/')?;
            if head.is_empty() {
                return None;
            }
            match *segment {
                Segment::Owner => owner = head,
                Segment::Repo => repo = head,
                Segment::Ref => reference = head,
                Segment::RepoAtRef => {
                    let (r, tag) = head.rsplit_once('@')?;
                    if r.is_empty() || tag.is_empty() {
                        return None;
                    }
                    repo = r;
                    reference = tag;
                }
                Segment::Literal(expected) => {
                    if head != expected {
                        return None;
                    }
                }
            }
            rest = tail;
        }

        if rest.is_empty() {
            return None;
        }
        if strict_names && ![owner, repo, reference].into_iter().all(is_valid_name) {
            return None;
        }

        Some(RouteMatch {
            shape: self.shape,
            owner,
            repo,
            reference,
            file: rest,
        })
    }

    /// Expand this rule's template with the captured values.
    pub fn upstream_url(&self, m: &RouteMatch<'_>, bases: &UpstreamBases) -> String {
        let mut out = String::with_capacity(self.template.len() + 64);
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let value = match &after[..close] {
                "github" => bases.github.as_str(),
                "raw" => bases.raw.as_str(),
                "owner" => m.owner,
                "repo" => m.repo,
                "ref" => m.reference,
                "file" => m.file,
                _ => &rest[open..open + close + 2],
            };
            out.push_str(value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }
}

/// Classify `path` against [`SHAPES`], returning the first match and its rule.
pub fn classify(path: &str, strict_names: bool) -> Option<(&'static ShapeRule, RouteMatch<'_>)> {
    SHAPES
        .iter()
        .find_map(|rule| rule.matches(path, strict_names).map(|m| (rule, m)))
}

/// Owner, repository and ref names: `[A-Za-z0-9_.-]+`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}
