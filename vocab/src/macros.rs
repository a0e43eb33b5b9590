/// Generates named accessors on [crate::Entity] for vocabulary properties: `$name()` returns
/// the property slot and `$name_mut()` a mutable one, both `None` when the entity's type
/// doesn't carry that property.
macro_rules! accessors {
	( $( $(#[$meta:meta])* $name:ident => $prop:path ),* $(,)? ) => {
		paste::paste! {
			impl $crate::Entity {
				$(
					$(#[$meta])*
					pub fn $name(&self) -> Option<&$crate::Slot> {
						self.slot(&$prop)
					}

					$(#[$meta])*
					pub fn [< $name _mut >](&mut self) -> Option<&mut $crate::Slot> {
						self.slot_mut(&$prop)
					}
				)*
			}
		}
	};
}

pub(crate) use accessors;
