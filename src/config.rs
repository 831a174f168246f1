use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The flavor of Markdown to parse.
/// Each flavor has a different set of default block settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// CommonMark: headings and blockquotes may interrupt paragraphs
    #[default]
    CommonMark,
    /// Pandoc Markdown: a blank line is required before headings and blockquotes
    Pandoc,
}

/// Block grammar toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocks {
    pub blockquotes: bool,
    pub thematic_breaks: bool,
    pub atx_headings: bool,
    pub setext_headings: bool,
    pub indented_code: bool,
    pub fenced_code: bool,
    pub html_blocks: bool,

    /// ATX headings cannot interrupt a paragraph
    pub blank_before_header: bool,
    /// Blockquotes cannot interrupt a paragraph
    pub blank_before_blockquote: bool,
}

impl Default for Blocks {
    fn default() -> Self {
        Self::for_flavor(Flavor::default())
    }
}

impl Blocks {
    /// Get the default block settings for a given flavor.
    pub fn for_flavor(flavor: Flavor) -> Self {
        let all = Self {
            blockquotes: true,
            thematic_breaks: true,
            atx_headings: true,
            setext_headings: true,
            indented_code: true,
            fenced_code: true,
            html_blocks: true,
            blank_before_header: false,
            blank_before_blockquote: false,
        };

        match flavor {
            Flavor::CommonMark => all,
            Flavor::Pandoc => Self {
                blank_before_header: true,
                blank_before_blockquote: true,
                ..all
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub flavor: Flavor,
    /// Tab stop width used when expanding tabs before tokenizing.
    pub tab_width: usize,
    /// Tokenize `<!-- -->`, `<![CDATA[ ]]>` and `<? ?>` as single raw tokens.
    pub raw_html: bool,
    pub blocks: Blocks,
}

impl Default for Config {
    fn default() -> Self {
        let flavor = Flavor::default();
        Self {
            flavor,
            tab_width: 4,
            raw_html: false,
            blocks: Blocks::for_flavor(flavor),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Switch flavor, resetting block settings to that flavor's defaults.
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.config.flavor = flavor;
        self.config.blocks = Blocks::for_flavor(flavor);
        self
    }

    pub fn tab_width(mut self, width: usize) -> Self {
        self.config.tab_width = width;
        self
    }

    pub fn raw_html(mut self, enabled: bool) -> Self {
        self.config.raw_html = enabled;
        self
    }

    pub fn blocks(mut self, blocks: Blocks) -> Self {
        self.config.blocks = blocks;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

// On-disk shape: every key optional, missing keys fall back to the flavor.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    flavor: Option<Flavor>,
    tab_width: Option<usize>,
    raw_html: Option<bool>,
    blocks: BlocksFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BlocksFile {
    blockquotes: Option<bool>,
    thematic_breaks: Option<bool>,
    atx_headings: Option<bool>,
    setext_headings: Option<bool>,
    indented_code: Option<bool>,
    fenced_code: Option<bool>,
    html_blocks: Option<bool>,
    blank_before_header: Option<bool>,
    blank_before_blockquote: Option<bool>,
}

impl BlocksFile {
    fn resolve(self, base: Blocks) -> Blocks {
        Blocks {
            blockquotes: self.blockquotes.unwrap_or(base.blockquotes),
            thematic_breaks: self.thematic_breaks.unwrap_or(base.thematic_breaks),
            atx_headings: self.atx_headings.unwrap_or(base.atx_headings),
            setext_headings: self.setext_headings.unwrap_or(base.setext_headings),
            indented_code: self.indented_code.unwrap_or(base.indented_code),
            fenced_code: self.fenced_code.unwrap_or(base.fenced_code),
            html_blocks: self.html_blocks.unwrap_or(base.html_blocks),
            blank_before_header: self.blank_before_header.unwrap_or(base.blank_before_header),
            blank_before_blockquote: self
                .blank_before_blockquote
                .unwrap_or(base.blank_before_blockquote),
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let defaults = Config::default();
        let flavor = file.flavor.unwrap_or(defaults.flavor);
        Self {
            flavor,
            tab_width: file.tab_width.unwrap_or(defaults.tab_width),
            raw_html: file.raw_html.unwrap_or(defaults.raw_html),
            blocks: file.blocks.resolve(Blocks::for_flavor(flavor)),
        }
    }
}

const CANDIDATE_NAMES: &[&str] = &[".mdblocks.toml", "mdblocks.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<ConfigFile>(s)
        .map(Config::from)
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid config {}: {e}", path.display()),
            )
        })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("mdblocks").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("mdblocks")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mdblocks.toml, mdblocks.toml
/// 3) XDG: $XDG_CONFIG_HOME/mdblocks/config.toml or ~/.config/mdblocks/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
