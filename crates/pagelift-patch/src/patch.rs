//! Forward-merge walk with media identity rewriting.

use pagelift_adf::{MEDIA_SINGLE, MediaSingle, RemapTable, Slice};
use serde_json::{Map, Value};

use crate::error::PatchError;

/// Root label used in walk diagnostics.
const ROOT_PATH: &str = "#root";

/// Patch `destination` so it mirrors `source`, rewriting remapped media.
///
/// Walks both trees depth-first in lockstep. Positions missing from the
/// destination are seeded with a copy of the source subtree; positions the
/// destination already holds are kept and merged into, so entries beyond
/// the source's length survive. A `mediaSingle` node whose media ID has a
/// [`RemapTable`] entry gets its `content` replaced with the rewritten
/// media and caption pair.
///
/// The walk is one-directional (source to destination) and never removes
/// anything from the destination.
pub fn patch(
    source: &Value,
    destination: &mut Value,
    remap: &RemapTable,
) -> Result<(), PatchError> {
    patch_value(source, destination, remap, 0, ROOT_PATH)
}

fn patch_value(
    source: &Value,
    destination: &mut Value,
    remap: &RemapTable,
    depth: usize,
    path: &str,
) -> Result<(), PatchError> {
    match source {
        Value::Array(items) => {
            let merged = array_slot(destination);
            for (index, item) in items.iter().enumerate() {
                if merged.len() <= index {
                    merged.push(item.clone());
                }
                patch_value(
                    item,
                    &mut merged[index],
                    remap,
                    depth + 1,
                    &format!("{path} > {index}"),
                )?;
            }
            Ok(())
        }
        Value::Object(fields) => {
            let merged = object_slot(destination);
            for (key, value) in fields {
                if !merged.contains_key(key) {
                    merged.insert(key.clone(), value.clone());
                }
            }

            if fields.get("type").and_then(Value::as_str) == Some(MEDIA_SINGLE) {
                // A media-single's keys are seeded above but never recursed
                // into; on a remap hit only `content` is replaced. Keys the
                // destination already held keep whatever value they had.
                return rewrite_media_single(fields, merged, remap, path);
            }

            for (key, value) in fields {
                let Some(slot) = merged.get_mut(key) else {
                    continue;
                };
                patch_value(value, slot, remap, depth + 1, &format!("{path} > {key}"))?;
            }
            Ok(())
        }
        scalar => {
            tracing::debug!(depth, path, value = %scalar, "scalar leaf");
            Ok(())
        }
    }
}

/// Replace a matched media-single's `content` with its rewritten children.
///
/// Anything that keeps the node from matching (a shape the model does not
/// fit, an absent or malformed media ID, a missing remap entry) leaves the
/// seeded copy in place without raising.
fn rewrite_media_single(
    fields: &Map<String, Value>,
    merged: &mut Map<String, Value>,
    remap: &RemapTable,
    path: &str,
) -> Result<(), PatchError> {
    let node: Slice = match serde_json::from_value(Value::Object(fields.clone())) {
        Ok(node) => node,
        Err(error) => {
            tracing::debug!(path, %error, "media single does not fit the node model");
            return Ok(());
        }
    };
    let Ok(media) = MediaSingle::new(&node) else {
        return Ok(());
    };
    let Some(original_id) = media.media_id() else {
        return Ok(());
    };
    let Some(entry) = remap.get(&original_id) else {
        tracing::debug!(path, %original_id, "media ID has no remap entry");
        return Ok(());
    };

    let replacement = media.rewritten_content(entry.media_id, &entry.collection);
    merged.insert("content".to_owned(), serde_json::to_value(replacement)?);
    tracing::debug!(path, %original_id, new_id = %entry.media_id, "rewrote media identity");
    Ok(())
}

/// Destination slot as an array, resetting a mismatched shape.
fn array_slot(destination: &mut Value) -> &mut Vec<Value> {
    if !destination.is_array() {
        *destination = Value::Array(Vec::new());
    }
    match destination {
        Value::Array(items) => items,
        _ => unreachable!("slot was just reset to an array"),
    }
}

/// Destination slot as an object, resetting a mismatched shape.
fn object_slot(destination: &mut Value) -> &mut Map<String, Value> {
    if !destination.is_object() {
        *destination = Value::Object(Map::new());
    }
    match destination {
        Value::Object(fields) => fields,
        _ => unreachable!("slot was just reset to an object"),
    }
}
