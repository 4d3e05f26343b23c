//! Positional command grammar.
//!
//! ```text
//! invocation  := filename dims placement*
//! dims        := <int>[x,]<int>
//! placement   := "-background" path
//!              | dims content
//! content     := "include:" path | "file:" path | literal text
//! ```
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

static DIMS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[x,](\d+)$").unwrap());

const BACKGROUND_FLAG: &str = "-background";
const INCLUDE_PREFIX: &str = "include:";
const FILE_PREFIX: &str = "file:";

/// Where a text placement gets its string from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    Literal(String),
    /// Read the whole file when the command runs.
    Include(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    DrawText { origin: (u32, u32), text: TextSource },
    PasteImage { origin: (u32, u32), path: PathBuf },
}

impl Command {
    pub fn origin(&self) -> (u32, u32) {
        match self {
            Command::DrawText { origin, .. } | Command::PasteImage { origin, .. } => *origin,
        }
    }

    fn from_content(origin: (u32, u32), content: &str) -> Self {
        if let Some(path) = content.strip_prefix(INCLUDE_PREFIX) {
            Command::DrawText {
                origin,
                text: TextSource::Include(PathBuf::from(path)),
            }
        } else if let Some(path) = content.strip_prefix(FILE_PREFIX) {
            Command::PasteImage {
                origin,
                path: PathBuf::from(path),
            }
        } else {
            Command::DrawText {
                origin,
                text: TextSource::Literal(content.to_string()),
            }
        }
    }
}

/// A fully parsed invocation. Commands are in compositing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub output: PathBuf,
    pub background: Option<PathBuf>,
    pub dims: (u32, u32),
    pub commands: Vec<Command>,
}

/// Parse `WxH` or `X,Y`.
pub fn parse_dims(token: &str) -> Option<(u32, u32)> {
    let caps = DIMS_RE.captures(token)?;
    let a = caps.get(1)?.as_str().parse().ok()?;
    let b = caps.get(2)?.as_str().parse().ok()?;
    Some((a, b))
}

/// Parse the argument vector (program name excluded).
///
/// Any malformed input yields `None`; there is no partial result.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Option<Invocation> {
    let [output, dims, rest @ ..] = args else {
        return None;
    };
    let mut invocation = Invocation {
        output: PathBuf::from(output.as_ref()),
        background: None,
        dims: parse_dims(dims.as_ref())?,
        commands: Vec::new(),
    };

    let mut tokens = rest.iter().map(|s| s.as_ref());
    while let Some(token) = tokens.next() {
        if token == BACKGROUND_FLAG {
            invocation.background = Some(PathBuf::from(tokens.next()?));
            continue;
        }
        let origin = parse_dims(token)?;
        let content = tokens.next()?;
        invocation
            .commands
            .push(Command::from_content(origin, content));
    }
    Some(invocation)
}
