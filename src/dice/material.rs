//! Optical constants for the glass shell and the studio lighting around it.

use std::f64::consts::FRAC_PI_3;

use super::geometry::{dot, normalize, scale, sub, Euler, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Moves each channel toward white by `amount` in `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lift = |c: u8| (c as f64 + (255.0 - c as f64) * amount).round() as u8;
        Self { r: lift(self.r), g: lift(self.g), b: lift(self.b), a: self.a }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Smoked glass. Transmission 1 with zero roughness: a polished, fully
/// transmissive shell tinted dark charcoal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassMaterial {
    pub transmission: f64,
    pub roughness: f64,
    pub thickness: f64,
    pub ior: f64,
    pub chromatic_aberration: f64,
    pub anisotropy: f64,
    pub distortion: f64,
    pub clearcoat: f64,
    pub attenuation_distance: f64,
    pub tint: Rgba,
}

pub const SMOKED_GLASS: GlassMaterial = GlassMaterial {
    transmission: 1.0,
    roughness: 0.0,
    thickness: 1.5,
    ior: 1.5,
    chromatic_aberration: 0.06,
    anisotropy: 0.1,
    distortion: 0.1,
    clearcoat: 1.0,
    attenuation_distance: 0.75,
    tint: Rgba::rgb(0x20, 0x20, 0x20),
};

/// Glowing pip material; emissive so it punches through the dark glass.
pub const PIP_COLOR: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
pub const PIP_EMISSIVE_INTENSITY: f64 = 1.5;

pub const BACKGROUND: &str = "#f0f0f0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelForm {
    Rect,
    Circle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightPanel {
    pub form: PanelForm,
    pub intensity: f64,
    pub position: Vec3,
    pub scale: f64,
}

pub const LIGHT_PANELS: [LightPanel; 3] = [
    LightPanel { form: PanelForm::Rect, intensity: 5.0, position: [3.0, 4.0, 3.0], scale: 5.0 },
    LightPanel { form: PanelForm::Rect, intensity: 3.0, position: [-5.0, 0.0, -5.0], scale: 5.0 },
    LightPanel { form: PanelForm::Circle, intensity: 2.0, position: [0.0, 5.0, 0.0], scale: 2.0 },
];

/// The panels hang from one rotated rig.
pub const ENVIRONMENT_ROTATION: Euler = Euler::new(-FRAC_PI_3, 0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactShadow {
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub blur: f64,
    pub far: f64,
}

pub const CONTACT_SHADOW: ContactShadow = ContactShadow {
    y: -1.6,
    opacity: 0.6,
    scale: 15.0,
    blur: 2.5,
    far: 4.0,
};

impl ContactShadow {
    /// Shadow strength for a die whose lowest point is `gap` above the
    /// ground plane. Fades to nothing at `far`.
    pub fn opacity_at(&self, gap: f64) -> f64 {
        let falloff = 1.0 - (gap / self.far).clamp(0.0, 1.0);
        self.opacity * falloff
    }
}

/// Direction and strength of each panel as seen from the origin, after the
/// rig rotation.
pub fn environment_lights() -> Vec<(Vec3, f64)> {
    let rig = ENVIRONMENT_ROTATION.matrix();
    LIGHT_PANELS
        .iter()
        .map(|panel| {
            let area = match panel.form {
                PanelForm::Rect => panel.scale * panel.scale,
                PanelForm::Circle => std::f64::consts::PI * (panel.scale / 2.0).powi(2),
            };
            // Larger panels read brighter; normalised against a unit rect.
            let strength = panel.intensity * (1.0 + area.ln_1p() / 10.0);
            (normalize(rig.apply(panel.position)), strength)
        })
        .collect()
}

/// Schlick approximation of Fresnel reflectance.
pub fn fresnel(cos_theta: f64, ior: f64) -> f64 {
    let r0 = ((ior - 1.0) / (ior + 1.0)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos_theta.clamp(0.0, 1.0)).powi(5)
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    sub(incident, scale(normal, 2.0 * dot(incident, normal)))
}

/// How one shell face should be filled and outlined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceShade {
    pub fill: Rgba,
    pub edge: Rgba,
    /// Pixel split between the red and blue fringe on edges.
    pub fringe: f64,
}

pub fn shade_face(material: &GlassMaterial, normal: Vec3, view_dir: Vec3, lights: &[(Vec3, f64)]) -> FaceShade {
    let total: f64 = lights.iter().map(|(_, strength)| strength).sum::<f64>().max(f64::EPSILON);
    let shininess = 2.0 / (material.roughness.max(0.02).powi(2)) - 2.0;

    let (diffuse, specular) = lights.iter().fold((0.0, 0.0), |(d, s), (dir, strength)| {
        let lambert = dot(normal, *dir).max(0.0);
        let mirrored = reflect(scale(*dir, -1.0), normal);
        let highlight = dot(mirrored, view_dir).max(0.0).powf(shininess.min(256.0));
        (d + lambert * strength, s + highlight * strength)
    });
    let diffuse = diffuse / total;
    let specular = specular / total * material.clearcoat;

    let cos_view = dot(normal, view_dir).abs();
    let reflectance = fresnel(cos_view, material.ior);
    let absorbed = 1.0 - material.transmission * (1.0 - (-material.thickness / material.attenuation_distance).exp()) * 0.5;

    let fill = material
        .tint
        .lighten(0.12 * diffuse + 0.6 * specular + 0.4 * reflectance)
        .with_alpha(0.35 * absorbed + 0.5 * reflectance + 0.3 * specular);
    let edge = Rgba::rgb(0xff, 0xff, 0xff).with_alpha(0.25 + 0.6 * reflectance);

    FaceShade {
        fill,
        edge,
        fringe: material.chromatic_aberration * (1.0 + material.distortion) * 10.0 * (1.0 - cos_view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresnel_grows_toward_grazing_angles() {
        let head_on = fresnel(1.0, SMOKED_GLASS.ior);
        assert!((head_on - 0.04).abs() < 1e-9);
        assert!(fresnel(0.5, SMOKED_GLASS.ior) > head_on);
        assert!((fresnel(0.0, SMOKED_GLASS.ior) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lights_are_unit_directions() {
        let lights = environment_lights();
        assert_eq!(lights.len(), 3);
        for (dir, strength) in lights {
            assert!((dot(dir, dir) - 1.0).abs() < 1e-9);
            assert!(strength > 0.0);
        }
    }

    #[test]
    fn shading_stays_in_gamut() {
        let lights = environment_lights();
        let normals = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];
        for normal in normals {
            let shade = shade_face(&SMOKED_GLASS, normal, [0.0, 0.0, 1.0], &lights);
            assert!(shade.fill.a >= 0.0 && shade.fill.a <= 1.0);
            assert!(shade.edge.a >= 0.0 && shade.edge.a <= 1.0);
            assert!(shade.fill.r >= SMOKED_GLASS.tint.r);
            assert!(shade.fringe >= 0.0);
        }
    }

    #[test]
    fn grazing_faces_catch_more_light() {
        let lights = environment_lights();
        let facing = shade_face(&SMOKED_GLASS, [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], &lights);
        let grazing = shade_face(&SMOKED_GLASS, normalize([0.0, 0.2, 1.0]), normalize([0.0, 1.0, 0.05]), &lights);
        assert!(grazing.edge.a > facing.edge.a);
        assert!(grazing.fringe > facing.fringe);
    }

    #[test]
    fn shadow_fades_with_height() {
        assert!((CONTACT_SHADOW.opacity_at(0.0) - 0.6).abs() < 1e-9);
        assert!(CONTACT_SHADOW.opacity_at(1.0) < CONTACT_SHADOW.opacity_at(0.5));
        assert_eq!(CONTACT_SHADOW.opacity_at(10.0), 0.0);
    }

    #[test]
    fn rgba_css_and_lighten() {
        assert_eq!(Rgba::rgb(32, 32, 32).with_alpha(0.5).css(), "rgba(32, 32, 32, 0.500)");
        assert_eq!(Rgba::rgb(0, 0, 0).lighten(1.0), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::rgb(10, 20, 30).lighten(0.0), Rgba::rgb(10, 20, 30));
    }
}
