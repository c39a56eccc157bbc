use facet::Facet;

#[derive(Facet)]
pub struct Args {
    /// Path to source directory to process
    #[facet(positional, default = ".".to_string())]
    pub source: String,

    /// File extension to process (default: from config, else 'go')
    #[facet(named, short = 'e', long, default)]
    pub ext: Option<String>,

    /// Path to a config file (default: nearest .debugstrip.toml)
    #[facet(named, short = 'c', long, default)]
    pub config: Option<String>,

    /// Skip files matched by .gitignore and hidden files
    #[facet(named, short = 'g', long, default)]
    pub gitignore: bool,

    /// Preview changes without writing files
    #[facet(named, short = 'n', long, default)]
    pub dry_run: bool,

    /// Show verbose output
    #[facet(named, short = 'v', long, default)]
    pub verbose: bool,

    /// Show this help message
    #[facet(named, short = 'h', long, default)]
    pub help: bool,
}

pub fn print_usage() {
    println!("Usage: debugstrip [OPTIONS] <SOURCE>");
    println!();
    println!("Remove debug-level logging statements from source files in place.");
    println!();
    println!("Arguments:");
    println!("  <SOURCE>            Path to source directory to process (default: '.')");
    println!();
    println!("Options:");
    println!("  -e, --ext <ext>     File extension to process (default: from config, else 'go')");
    println!("  -c, --config <file> Config file (default: nearest .debugstrip.toml)");
    println!("  -g, --gitignore     Skip files matched by .gitignore and hidden files");
    println!("  -n, --dry-run       Preview changes without writing files");
    println!("  -v, --verbose       Show verbose output");
    println!("  -h, --help          Show this help message");
    println!();
    println!("Examples:");
    println!("  # Strip log.Debug(...) calls from every .go file under internal/");
    println!("  debugstrip internal");
    println!();
    println!("  # Preview which files would change");
    println!("  debugstrip --dry-run internal (or `-n` for short)");
    println!();
    println!("Config (.debugstrip.toml):");
    println!("  [debugstrip]");
    println!("  debug-call = \".Debug(\"");
    println!("  field-opener = \".WithField(\"");
    println!("  unterminated = \"keep\"   # or \"drop\"");
    println!("  # values are bare, 'literal', or \"quoted\" with \\\" \\\\ \\t escapes");
}
