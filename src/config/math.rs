use std::fmt;

/// Angle in radians, stored as a single-precision scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rad(pub f32);

/// 2-component single-precision vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
}

/// 3-component single-precision vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
}

/// 4-component single-precision vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec4 {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
	/// W component.
	pub w: f32,
}

/// Quaternion with scalar part first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quat {
	/// Scalar part.
	pub w: f32,
	/// Vector X component.
	pub x: f32,
	/// Vector Y component.
	pub y: f32,
	/// Vector Z component.
	pub z: f32,
}

/// 3x3 matrix, column-major flat storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mat3(pub [f32; 9]);

/// 4x4 matrix, column-major flat storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Vec2 {
	/// Build from components.
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

impl Vec3 {
	/// Build from components.
	pub const fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
}

impl Vec4 {
	/// Build from components.
	pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
		Self { x, y, z, w }
	}
}

impl Quat {
	/// Build from scalar part followed by vector components.
	pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
		Self { w, x, y, z }
	}

	/// Identity rotation.
	pub const fn identity() -> Self {
		Self::new(1.0, 0.0, 0.0, 0.0)
	}
}

impl Mat3 {
	/// Identity matrix.
	pub const fn identity() -> Self {
		Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
	}
}

impl Mat4 {
	/// Identity matrix.
	pub const fn identity() -> Self {
		let mut cells = [0.0; 16];
		cells[0] = 1.0;
		cells[5] = 1.0;
		cells[10] = 1.0;
		cells[15] = 1.0;
		Self(cells)
	}
}

impl fmt::Display for Rad {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} rad", self.0)
	}
}

impl fmt::Display for Vec2 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{} {}]", self.x, self.y)
	}
}

impl fmt::Display for Vec3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{} {} {}]", self.x, self.y, self.z)
	}
}

impl fmt::Display for Vec4 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{} {} {} {}]", self.x, self.y, self.z, self.w)
	}
}

impl fmt::Display for Quat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} [{} {} {}]", self.w, self.x, self.y, self.z)
	}
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[f32]) -> fmt::Result {
	f.write_str("[")?;
	for (idx, cell) in cells.iter().enumerate() {
		if idx > 0 {
			f.write_str(" ")?;
		}
		write!(f, "{cell}")?;
	}
	f.write_str("]")
}

impl fmt::Display for Mat3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_cells(f, &self.0)
	}
}

impl fmt::Display for Mat4 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_cells(f, &self.0)
	}
}
