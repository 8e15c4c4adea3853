//! Blueprint path derivation
//!
//! Structures are identified by the blueprint their class was generated from.
//! The host only exposes the full name of the class default object, e.g.
//!
//! ```text
//! BP_Foundation_Metal_C /Game/Mods/.../BP_Foundation_Metal.Default__BP_Foundation_Metal_C
//! ```
//!
//! which is turned into the asset reference form
//!
//! ```text
//! Blueprint'/Game/Mods/.../BP_Foundation_Metal.BP_Foundation_Metal'
//! ```

use std::ptr::NonNull;

use structguard_sdk::UObject;

use crate::host::ServerApi;

/// Suffix the engine appends to blueprint-generated class names
const GENERATED_CLASS_SUFFIX: &str = "_C";

/// Name prefix of class default objects
const DEFAULT_OBJECT_PREFIX: &str = "Default__";

/// Convert a default object full name into a blueprint path
///
/// Returns None when the name has no space separating type tag and path.
pub fn blueprint_from_full_name(full_name: &str) -> Option<String> {
    let (_, path) = full_name.split_once(' ')?;
    let path = path.strip_suffix(GENERATED_CLASS_SUFFIX).unwrap_or(path);

    Some(format!("Blueprint'{path}'").replace(DEFAULT_OBJECT_PREFIX, ""))
}

/// Blueprint path of an object's class, or an empty string
///
/// Empty when the object is null, has no class, or its default object's
/// full name cannot be resolved or parsed.
///
/// # Safety
/// `object` must be null or point to a live engine object.
pub unsafe fn blueprint_path<A: ServerApi + ?Sized>(api: &A, object: *mut UObject) -> String {
    let Some(object) = NonNull::new(object) else {
        return String::new();
    };
    let Some(class) = api.class_of(object) else {
        return String::new();
    };

    api.default_object_full_name(class)
        .and_then(|name| blueprint_from_full_name(&name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationStyle;
    use std::collections::HashMap;
    use structguard_sdk::{AShooterPlayerController, UClass};

    /// Objects are their own class; names are looked up by address
    struct FakeReflection {
        names: HashMap<usize, String>,
        classless: Vec<usize>,
    }

    impl ServerApi for FakeReflection {
        unsafe fn class_of(&self, object: NonNull<UObject>) -> Option<NonNull<UClass>> {
            if self.classless.contains(&(object.as_ptr() as usize)) {
                None
            } else {
                Some(object.cast())
            }
        }

        unsafe fn default_object_full_name(&self, class: NonNull<UClass>) -> Option<String> {
            self.names.get(&(class.as_ptr() as usize)).cloned()
        }

        unsafe fn send_notification(
            &self,
            _: NonNull<AShooterPlayerController>,
            _: &NotificationStyle,
            _: &str,
        ) {
            unreachable!("path derivation never notifies")
        }
    }

    #[test]
    fn test_generated_class_suffix_trimmed() {
        let path = blueprint_from_full_name(
            "BP_Foundation_Metal_C /Game/Mods/StructuresPlusMod/Structures/Foundations/Square/Metal/BP_Foundation_Metal.Default__BP_Foundation_Metal_C",
        );
        assert_eq!(
            path.as_deref(),
            Some("Blueprint'/Game/Mods/StructuresPlusMod/Structures/Foundations/Square/Metal/BP_Foundation_Metal.BP_Foundation_Metal'")
        );
    }

    #[test]
    fn test_only_suffix_trimmed() {
        assert_eq!(
            blueprint_from_full_name("Tag /Game/Thing.Thing_C").as_deref(),
            Some("Blueprint'/Game/Thing.Thing'")
        );
        // Lowercase suffix is not the generated class marker
        assert_eq!(
            blueprint_from_full_name("Tag /Game/Thing.Thing_c").as_deref(),
            Some("Blueprint'/Game/Thing.Thing_c'")
        );
    }

    #[test]
    fn test_native_class_kept_whole() {
        assert_eq!(
            blueprint_from_full_name("Class /Script/ShooterGame.Default__PrimalStructure").as_deref(),
            Some("Blueprint'/Script/ShooterGame.PrimalStructure'")
        );
    }

    #[test]
    fn test_no_space_is_none() {
        assert_eq!(blueprint_from_full_name("BP_Foundation_Metal_C"), None);
        assert_eq!(blueprint_from_full_name(""), None);
    }

    #[test]
    fn test_splits_on_first_space() {
        assert_eq!(
            blueprint_from_full_name("Tag /Game/With Space.X_C").as_deref(),
            Some("Blueprint'/Game/With Space.X'")
        );
    }

    #[test]
    fn test_every_default_marker_removed() {
        assert_eq!(
            blueprint_from_full_name("Tag /Game/Default__A.Default__B").as_deref(),
            Some("Blueprint'/Game/A.B'")
        );
        assert_eq!(
            blueprint_from_full_name("Tag /Game/default__A").as_deref(),
            Some("Blueprint'/Game/default__A'")
        );
    }

    #[test]
    fn test_blueprint_path_edge_cases() {
        let api = FakeReflection {
            names: HashMap::from([
                (0x100, "Tag /Game/A.Default__A_C".to_string()),
                (0x200, "NoSpaceHere".to_string()),
                (0x300, "Tag /Game/Classless_C".to_string()),
            ]),
            classless: vec![0x300],
        };

        unsafe {
            assert_eq!(
                blueprint_path(&api, 0x100usize as *mut UObject),
                "Blueprint'/Game/A.A'"
            );
            assert_eq!(blueprint_path(&api, std::ptr::null_mut()), "");
            assert_eq!(blueprint_path(&api, 0x200usize as *mut UObject), "");
            assert_eq!(blueprint_path(&api, 0x300usize as *mut UObject), "");
            // No full name known for this class
            assert_eq!(blueprint_path(&api, 0x400usize as *mut UObject), "");
        }
    }
}
