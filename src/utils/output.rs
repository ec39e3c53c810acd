use crate::models::ObjectListing;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

pub const START_MARKER: &str = "THIS IS R2 Cloudflare";
pub const LISTING_MARKER: &str = "R2 Service Cloudflare";

pub fn write_marker<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)
}

/// One tab-indented JSON document per object, in listing order.
pub fn render_listing<W: Write>(out: &mut W, listing: &ObjectListing) -> io::Result<()> {
    for object in &listing.objects {
        let mut ser = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"\t"));
        object.serialize(&mut ser).map_err(io::Error::other)?;
        writeln!(out)?;
    }
    Ok(())
}
