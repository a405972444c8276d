//! Destination folder reconciliation
//!
//! Maps the desired folder name to an existing remote folder, if one is
//! present. The engine creates the folder when the lookup comes back empty.

use quivrsync_core::domain::knowledge::RemoteItem;

/// Finds an existing folder with the given name among the remote items.
///
/// Linear search for `is_folder && file_name == name`; first match wins.
/// The listing order is not guaranteed stable by the service, so if the
/// remote happens to hold multiple same-named folders, which one is reused
/// is up to that order. No deduplication is attempted.
pub fn find_folder<'a>(items: &'a [RemoteItem], name: &str) -> Option<&'a RemoteItem> {
    items
        .iter()
        .find(|item| item.is_folder && item.file_name == name)
}
