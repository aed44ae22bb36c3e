//! Favorites traversal: prints title, type, and stream URL per favorite.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};
use tunein_api::{TuneinClient, TuneinError};
use tunein_api::favorites::{classify, container, container_items};
use tunein_api::types::{Classified, Favorite};

/// Walk every favorite entry and print what resolves.
///
/// Entries without a `List`/`Gallery` container print nothing. Per-item
/// skips print a diagnostic line. A resolver fault for one id leaves its
/// URL line out; transport and shape errors abort.
pub fn print_favorites<W: Write>(
    client: &TuneinClient,
    entries: &[Value],
    out: &mut W,
) -> Result<()> {
    for entry in entries {
        let Some(list) = container(entry) else {
            continue;
        };
        for item in container_items(list)? {
            match classify(item)? {
                Classified::NoCell => writeln!(out, "no cell found, skipping")?,
                Classified::NoGuideId => {}
                Classified::NoSeoInfo { guide_id } => {
                    debug!(%guide_id, "missing SEOInfo");
                    writeln!(out, "no seo info! skipping")?;
                }
                Classified::Audiobook { guide_id } => debug!(%guide_id, "skipping audiobook"),
                Classified::Playable(fav) => print_favorite(client, &fav, out)?,
            }
        }
    }
    Ok(())
}

fn print_favorite<W: Write>(client: &TuneinClient, fav: &Favorite, out: &mut W) -> Result<()> {
    writeln!(out, "{}", fav.title)?;

    let mut guide_id = fav.guide_id.clone();
    if let Some(kind) = &fav.content_type {
        writeln!(out, "{kind}")?;
        if kind.is_serial() {
            let episode = client
                .latest_episode(&guide_id)
                .with_context(|| format!("failed to list episodes of {guide_id}"))?;
            let Some(episode) = episode else {
                writeln!(out, "no episodes found, skipping")?;
                return Ok(());
            };
            guide_id = episode;
        }
    }

    match client.resolve_stream(&guide_id) {
        Ok(Some(url)) => writeln!(out, "{url}")?,
        Ok(None) => {}
        Err(TuneinError::Api { status, fault }) => {
            warn!(%guide_id, %status, %fault, "tune rejected, no stream");
        }
        Err(e) => return Err(e).with_context(|| format!("failed to tune {guide_id}")),
    }
    Ok(())
}
