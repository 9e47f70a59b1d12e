#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

/// string-backed enums. closed ones reject unknown values, open ones keep them verbatim in a
/// catch-all variant so that unrecognized vocabulary never fails parsing
macro_rules! strenum {
	( $(#[$meta:meta])* pub enum $enum_name:ident { $($flat:ident => $lit:literal),+ $(,)? } ) => {
		$(#[$meta])*
		#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
		pub enum $enum_name {
			$($flat,)+
		}

		impl AsRef<str> for $enum_name {
			fn as_ref(&self) -> &str {
				match self {
					$(Self::$flat => $lit,)+
				}
			}
		}

		impl TryFrom<&str> for $enum_name {
			type Error = $crate::macros::TypeValueError;

			fn try_from(value: &str) -> Result<Self, Self::Error> {
				match value {
					$($lit => Ok(Self::$flat),)+
					_ => Err($crate::macros::TypeValueError),
				}
			}
		}

		impl std::fmt::Display for $enum_name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_ref())
			}
		}

		#[cfg(feature = "serde")]
		impl serde::Serialize for $enum_name {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.as_ref())
			}
		}

		#[cfg(feature = "serde")]
		impl<'de> serde::Deserialize<'de> for $enum_name {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				let value = <String as serde::Deserialize>::deserialize(deserializer)?;
				Self::try_from(value.as_str()).map_err(serde::de::Error::custom)
			}
		}
	};

	( $(#[$meta:meta])* pub enum $enum_name:ident { $($flat:ident => $lit:literal),+ ; $open:ident } ) => {
		$(#[$meta])*
		#[derive(PartialEq, Eq, Hash, Debug, Clone)]
		pub enum $enum_name {
			$($flat,)+
			$open(String),
		}

		impl AsRef<str> for $enum_name {
			fn as_ref(&self) -> &str {
				match self {
					$(Self::$flat => $lit,)+
					Self::$open(x) => x.as_str(),
				}
			}
		}

		impl From<&str> for $enum_name {
			fn from(value: &str) -> Self {
				match value {
					$($lit => Self::$flat,)+
					_ => Self::$open(value.to_string()),
				}
			}
		}

		impl From<String> for $enum_name {
			fn from(value: String) -> Self {
				Self::from(value.as_str())
			}
		}

		impl std::fmt::Display for $enum_name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_ref())
			}
		}

		#[cfg(feature = "serde")]
		impl serde::Serialize for $enum_name {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(self.as_ref())
			}
		}

		#[cfg(feature = "serde")]
		impl<'de> serde::Deserialize<'de> for $enum_name {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				let value = <String as serde::Deserialize>::deserialize(deserializer)?;
				Ok(Self::from(value))
			}
		}
	};
}

pub(crate) use strenum;

/// consuming builder setters: `set_x(self, val) -> Self`. the `base` arms write into the shared
/// [crate::Base] record and are meant for default methods of [crate::ActivityObjectMut]
macro_rules! setter {
	(base . $name:ident -> &str) => {
		paste::item! {
			fn [< set_ $name >](mut self, val: Option<&str>) -> Self {
				self.base_mut().$name = val.map(|x| x.to_string());
				self
			}
		}
	};

	(base . $name:ident -> $t:ty) => {
		paste::item! {
			fn [< set_ $name >](mut self, val: $t) -> Self {
				self.base_mut().$name = val;
				self
			}
		}
	};

	($name:ident -> &str) => {
		paste::item! {
			pub fn [< set_ $name >](mut self, val: Option<&str>) -> Self {
				self.$name = val.map(|x| x.to_string());
				self
			}
		}
	};

	($name:ident -> $t:ty) => {
		paste::item! {
			pub fn [< set_ $name >](mut self, val: $t) -> Self {
				self.$name = val;
				self
			}
		}
	};
}

pub(crate) use setter;
