//! Short Weierstrass group law shared by G1 and G2.
//!
//! Both groups are `y^2 = x^3 + b` with `a = 0`. They only differ in the base
//! field and the coefficient `b`, which a [`CurveConfig`] provides.
use crate::{CurveError, Field, Scalar, U256};
use core::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};

/// Parameters of a curve `y^2 = x^3 + b`.
pub trait CurveConfig: Copy + Debug + Eq + Send + Sync + 'static {
    /// Field the coordinates live in.
    type BaseField: Field;

    /// Coefficient `b`.
    const COEFF_B: Self::BaseField;
    /// Generator x-coordinate.
    const GENERATOR_X: Self::BaseField;
    /// Generator y-coordinate.
    const GENERATOR_Y: Self::BaseField;
}

/// Point in affine coordinates, or the point at infinity.
///
/// Construction does not validate curve membership; see [`AffinePoint::is_on_curve`]
/// and [`AffinePoint::checked_new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffinePoint<C: CurveConfig> {
    /// The identity element
    Infinity,
    /// A point with affine coordinates
    Finite {
        /// x-coordinate
        x: C::BaseField,
        /// y-coordinate
        y: C::BaseField,
    },
}

impl<C: CurveConfig> AffinePoint<C> {
    /// Creates a finite point without checking it is on the curve.
    #[inline]
    pub const fn new(x: C::BaseField, y: C::BaseField) -> Self {
        Self::Finite { x, y }
    }

    /// Creates a finite point, failing with [`CurveError::NotOnCurve`] if it is off the curve.
    #[inline]
    pub fn checked_new(x: C::BaseField, y: C::BaseField) -> Result<Self, CurveError> {
        let point = Self::new(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// The fixed group generator.
    #[inline]
    pub const fn generator() -> Self {
        Self::new(C::GENERATOR_X, C::GENERATOR_Y)
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub const fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Affine coordinates, `None` for the point at infinity.
    #[inline]
    pub fn coordinates(&self) -> Option<(C::BaseField, C::BaseField)> {
        match *self {
            Self::Infinity => None,
            Self::Finite { x, y } => Some((x, y)),
        }
    }

    /// Checks `y^2 = x^3 + b`. The point at infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Finite { x, y } => y.square() == x.square() * *x + C::COEFF_B,
        }
    }

    /// `2 * self`.
    ///
    /// Doubling a point with `y = 0` gives infinity.
    pub fn double(&self) -> Self {
        let Self::Finite { x, y } = *self else {
            return Self::Infinity;
        };
        let Some(inv) = y.double().inverse() else {
            return Self::Infinity;
        };
        let xx = x.square();
        let lambda = (xx.double() + xx) * inv;
        Self::chord_or_tangent(lambda, x, y, x)
    }

    /// `k * self` with the scalar taken as-is, not reduced modulo the group order.
    ///
    /// Left-to-right double-and-add in Jacobian coordinates with a single
    /// inversion at the end.
    pub fn mul_bigint(&self, k: &U256) -> Self {
        if self.is_infinity() {
            return Self::Infinity;
        }
        let mut acc = JacobianPoint::<C>::INFINITY;
        for i in (0..k.bit_len()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add_affine(self);
            }
        }
        acc.to_affine()
    }

    /// `k * self`.
    #[inline]
    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        self.mul_bigint(&k.into_u256())
    }

    /// Third vertex of the line with slope `lambda` through `(x1, y1)` and a point with
    /// x-coordinate `x2`, reflected.
    #[inline]
    fn chord_or_tangent(
        lambda: C::BaseField,
        x1: C::BaseField,
        y1: C::BaseField,
        x2: C::BaseField,
    ) -> Self {
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;
        Self::new(x3, y3)
    }
}

impl<C: CurveConfig> Add for AffinePoint<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (Self::Finite { x: x1, y: y1 }, Self::Finite { x: x2, y: y2 }) = (self, rhs) else {
            return if self.is_infinity() { rhs } else { self };
        };
        let Some(inv) = (x2 - x1).inverse() else {
            // same x: either the same point or its negation
            return if y1 == y2 {
                self.double()
            } else {
                Self::Infinity
            };
        };
        let lambda = (y2 - y1) * inv;
        Self::chord_or_tangent(lambda, x1, y1, x2)
    }
}

impl<C: CurveConfig> Neg for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Finite { x, y } => Self::new(x, -y),
        }
    }
}

impl<C: CurveConfig> Sub for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<C: CurveConfig> Mul<Scalar> for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        self.scalar_mul(&rhs)
    }
}

/// Jacobian coordinates `(X, Y, Z)` for `(X / Z^2, Y / Z^3)`. `Z = 0` is infinity.
#[derive(Clone, Copy, Debug)]
struct JacobianPoint<C: CurveConfig> {
    x: C::BaseField,
    y: C::BaseField,
    z: C::BaseField,
}

impl<C: CurveConfig> JacobianPoint<C> {
    const INFINITY: Self = Self {
        x: C::BaseField::ONE,
        y: C::BaseField::ONE,
        z: C::BaseField::ZERO,
    };

    #[inline]
    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    fn to_affine(&self) -> AffinePoint<C> {
        let Some(z_inv) = self.z.inverse() else {
            return AffinePoint::Infinity;
        };
        let z_inv2 = z_inv.square();
        AffinePoint::new(self.x * z_inv2, self.y * z_inv2 * z_inv)
    }

    /// dbl-2009-l
    fn double(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// madd-2007-bl
    fn add_affine(&self, rhs: &AffinePoint<C>) -> Self {
        let AffinePoint::Finite { x: x2, y: y2 } = *rhs else {
            return *self;
        };
        if self.is_infinity() {
            return Self {
                x: x2,
                y: y2,
                z: C::BaseField::ONE,
            };
        }
        let z1z1 = self.z.square();
        let u2 = x2 * z1z1;
        let s2 = y2 * self.z * z1z1;
        let h = u2 - self.x;
        let r = (s2 - self.y).double();
        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::INFINITY
            };
        }
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let v = self.x * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}
