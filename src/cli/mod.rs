//! # CLI Module
//!
//! The user-facing command implementations. Each command coordinates
//! the scrape, management and Spotify layers while owning all terminal
//! interaction: progress feedback, colored status lines, prompts.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth 2.0 PKCE flow
//! - [`fetch`] - scrape the tracklist page and write the trackfile
//! - [`list_tracks`] - render the trackfile as a table
//! - [`playlist`] - build a Spotify playlist from the trackfile
//!
//! ## Conventions
//!
//! Commands report progress with the `info!`/`success!`/`warning!`
//! macros and terminate through `error!` only when the operation
//! cannot meaningfully continue (missing token, empty trackfile, zero
//! resolved tracks). Partial failures (one unresolvable track, one
//! failed batch) are warned about and skipped so the rest of the run
//! still produces value.
//!
//! ## Typical session
//!
//! ```bash
//! tracklift auth            # once, opens the browser
//! tracklift fetch           # scrape the page into tracks.txt
//! tracklift tracks          # eyeball the result
//! tracklift playlist        # search + create + add in batches
//! ```

mod auth;
mod fetch;
mod playlist;
mod tracks;

pub use auth::auth;
pub use fetch::fetch;
pub use playlist::playlist;
pub use tracks::list_tracks;
