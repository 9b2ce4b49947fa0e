use std::ffi::OsString;

pub use clap::Parser;

use crate::panel::models::StatusFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Backend base URL. Falls back to DRAFTLINE_BASE_URL, then the
    /// built-in default.
    #[clap(short = 'u', long, help = "backend base URL")]
    base_url: Option<String>,

    /// Anti-forgery token sent on mutating requests. Falls back to
    /// DRAFTLINE_CSRF_TOKEN.
    #[clap(long, help = "anti-forgery token")]
    csrf_token: Option<String>,

    /// Initial search term for the first list fetch.
    #[clap(short = 's', long, default_value = "", help = "search term")]
    search: String,

    /// Publication-status filter: all, published or draft.
    #[clap(short = 'f', long, default_value = "all", help = "status filter")]
    filter: StatusFilter,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    base_url: Option<String>,
    csrf_token: Option<String>,
    search: String,
    filter: StatusFilter,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(ClapArgs::parse_from(itr))
    }

    pub fn base_url(&self) -> Option<&String> {
        self.base_url.as_ref()
    }

    pub fn csrf_token(&self) -> Option<&String> {
        self.csrf_token.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
            csrf_token: args.csrf_token,
            search: args.search,
            filter: args.filter,
        }
    }
}
