//! Certificate layout: a fixed table of anchor points and font sizes authored
//! against a 3000x2000 reference canvas, scaled per template at render time.
//!
//! Font sizes and stroke widths scale by `min(w/3000, h/2000)` so text never
//! overflows a narrow template; vertical anchors scale by the height ratio
//! alone so the vertical rhythm tracks template height. Horizontal positions
//! are never stored - centering is computed from measured text width at draw
//! time.

/// Reference canvas dimensions all layout constants are authored against.
pub const REFERENCE_WIDTH: u32 = 3000;
pub const REFERENCE_HEIGHT: u32 = 2000;

/// Verification code placement on the reference canvas.
pub const CODE_REF_Y: u32 = 1270;
pub const CODE_REF_SIZE: u32 = 150;

/// Underline geometry on the reference canvas.
pub const NAME_UNDERLINE_REF_Y: u32 = 730;
pub const NAME_UNDERLINE_REF_THICKNESS: u32 = 3;
pub const SIGNATURE_UNDERLINE_REF_Y: u32 = 1495;
pub const SIGNATURE_UNDERLINE_REF_THICKNESS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Italic,
    Bold,
}

/// Reference-canvas placement for one text role.
#[derive(Debug, Clone, Copy)]
pub struct RoleSpec {
    pub y: u32,
    pub size: u32,
    pub style: FontStyle,
}

/// Every text element drawn on a certificate, in top-to-bottom draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Title,
    DescriptionId,
    DescriptionEn,
    ParticipantName,
    AttendedId,
    AttendedEn,
    CourseId,
    CourseEn,
    OrganizerId,
    HeldOnId,
    OrganizerEn,
    HeldOnEn,
    Location,
    SignatureName,
    SignatureTitle,
}

impl Role {
    pub const ALL: [Role; 15] = [
        Role::Title,
        Role::DescriptionId,
        Role::DescriptionEn,
        Role::ParticipantName,
        Role::AttendedId,
        Role::AttendedEn,
        Role::CourseId,
        Role::CourseEn,
        Role::OrganizerId,
        Role::HeldOnId,
        Role::OrganizerEn,
        Role::HeldOnEn,
        Role::Location,
        Role::SignatureName,
        Role::SignatureTitle,
    ];

    /// The layout table. Compile-time constant, never derived from input.
    pub const fn spec(self) -> RoleSpec {
        use FontStyle::*;
        match self {
            Role::Title => RoleSpec { y: 330, size: 110, style: Italic },
            Role::DescriptionId => RoleSpec { y: 460, size: 44, style: Regular },
            Role::DescriptionEn => RoleSpec { y: 505, size: 36, style: Italic },
            Role::ParticipantName => RoleSpec { y: 630, size: 100, style: Bold },
            Role::AttendedId => RoleSpec { y: 770, size: 48, style: Regular },
            Role::AttendedEn => RoleSpec { y: 810, size: 36, style: Italic },
            Role::CourseId => RoleSpec { y: 885, size: 58, style: Regular },
            Role::CourseEn => RoleSpec { y: 935, size: 34, style: Italic },
            Role::OrganizerId => RoleSpec { y: 1005, size: 44, style: Regular },
            Role::HeldOnId => RoleSpec { y: 1045, size: 44, style: Regular },
            Role::OrganizerEn => RoleSpec { y: 1085, size: 34, style: Italic },
            Role::HeldOnEn => RoleSpec { y: 1120, size: 34, style: Italic },
            Role::Location => RoleSpec { y: 1200, size: 36, style: Regular },
            Role::SignatureName => RoleSpec { y: 1450, size: 44, style: Regular },
            Role::SignatureTitle => RoleSpec { y: 1505, size: 34, style: Regular },
        }
    }
}

/// Per-template scale factors, computed once and reused for every placement.
#[derive(Debug, Clone, Copy)]
pub struct ScaleFactors {
    pub scale_w: f32,
    pub scale_h: f32,
    /// `min(scale_w, scale_h)` - governs font sizes and stroke widths.
    pub scale: f32,
}

impl ScaleFactors {
    /// Both dimensions must be nonzero; the renderer rejects empty templates
    /// before getting here.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let scale_w = width as f32 / REFERENCE_WIDTH as f32;
        let scale_h = height as f32 / REFERENCE_HEIGHT as f32;
        Self {
            scale_w,
            scale_h,
            scale: scale_w.min(scale_h),
        }
    }

    /// Scaled font size for a role, floored, never below 1px.
    pub fn font_size(&self, role: Role) -> u32 {
        self.scaled_size(role.spec().size)
    }

    /// Scaled vertical anchor for a role.
    pub fn y(&self, role: Role) -> i32 {
        self.scaled_y(role.spec().y)
    }

    pub fn scaled_y(&self, ref_y: u32) -> i32 {
        (ref_y as f32 * self.scale_h) as i32
    }

    pub fn scaled_size(&self, ref_size: u32) -> u32 {
        (((ref_size as f32) * self.scale).floor() as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_min_of_axis_ratios() {
        let s = ScaleFactors::for_dimensions(3000, 2000);
        assert_eq!(s.scale, 1.0);

        let wide = ScaleFactors::for_dimensions(3000, 1000);
        assert_eq!(wide.scale_w, 1.0);
        assert_eq!(wide.scale_h, 0.5);
        assert_eq!(wide.scale, 0.5);

        let narrow = ScaleFactors::for_dimensions(1500, 2000);
        assert_eq!(narrow.scale_w, 0.5);
        assert_eq!(narrow.scale_h, 1.0);
        assert_eq!(narrow.scale, 0.5);
    }

    #[test]
    fn font_sizes_floor_and_never_hit_zero() {
        let s = ScaleFactors::for_dimensions(3000, 2000);
        for role in Role::ALL {
            assert_eq!(s.font_size(role), role.spec().size);
        }

        // A postage-stamp template still yields drawable glyph sizes.
        let tiny = ScaleFactors::for_dimensions(3, 2);
        for role in Role::ALL {
            assert_eq!(tiny.font_size(role), 1, "{:?}", role);
        }
    }

    #[test]
    fn half_size_template_halves_every_placement() {
        let full = ScaleFactors::for_dimensions(3000, 2000);
        let half = ScaleFactors::for_dimensions(1500, 1000);
        for role in Role::ALL {
            assert_eq!(half.font_size(role), full.font_size(role) / 2, "{:?}", role);
            assert_eq!(half.y(role), full.y(role) / 2, "{:?}", role);
        }
        assert_eq!(half.scaled_size(CODE_REF_SIZE), CODE_REF_SIZE / 2);
        assert_eq!(half.scaled_y(CODE_REF_Y), (CODE_REF_Y / 2) as i32);
    }

    #[test]
    fn vertical_anchors_follow_height_not_width() {
        // Wide template: fonts shrink with height, y tracks height too.
        let s = ScaleFactors::for_dimensions(6000, 1000);
        assert_eq!(s.scale, 0.5);
        assert_eq!(s.y(Role::Title), (330.0 * 0.5) as i32);

        // Narrow template: fonts shrink with width, y stays proportional to
        // the full height.
        let n = ScaleFactors::for_dimensions(1500, 2000);
        assert_eq!(n.scale, 0.5);
        assert_eq!(n.y(Role::Title), 330);
    }
}
