//! Pure 3D math for the decorative die. Everything here is a function of
//! elapsed time so it can be checked without a render loop.

use std::f64::consts::{FRAC_PI_2, PI};

use super::material::CONTACT_SHADOW;

pub type Vec3 = [f64; 3];

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: Vec3, s: f64) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn length(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

pub fn normalize(a: Vec3) -> Vec3 {
    let len = length(a);
    if len == 0.0 {
        a
    } else {
        scale(a, 1.0 / len)
    }
}

/// Row-major 3x3 rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3(pub [[f64; 3]; 3]);

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Mat3([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Mat3([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Mat3([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Mat3(out)
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        [dot(self.0[0], v), dot(self.0[1], v), dot(self.0[2], v)]
    }
}

/// Euler angles applied in X, then Y, then Z intrinsic order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn matrix(&self) -> Mat3 {
        Mat3::rotation_x(self.x)
            .mul(&Mat3::rotation_y(self.y))
            .mul(&Mat3::rotation_z(self.z))
    }
}

pub const DIE_SIZE: f64 = 2.0;
pub const CORNER_RADIUS: f64 = 0.25;
pub const PIP_RADIUS: f64 = 0.15;
/// Offset of the outer pips from a face center.
pub const PIP_SPREAD: f64 = 0.55;
/// Pips sit just inside the glass surface so they read through it.
pub const PIP_DEPTH: f64 = 1.0 - PIP_RADIUS + 0.05;

/// Shell orientation at `t = 0`.
pub const REST_ORIENTATION: Euler = Euler::new(0.0, 0.0, 0.1);

/// Tumbling rotation of the shell: two slow sine axes and a linear spin
/// about the vertical axis.
pub fn shell_orientation(t: f64) -> Euler {
    Euler::new((t * 0.2).sin() * 0.2, t * 0.25, (t * 0.2).cos() * 0.1)
}

/// Bobbing layer wrapped around the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
    pub range: (f64, f64),
}

pub const FLOAT: FloatMotion = FloatMotion {
    speed: 2.0,
    rotation_intensity: 0.5,
    float_intensity: 1.0,
    range: (-0.2, 0.2),
};

impl FloatMotion {
    pub fn rotation(&self, t: f64) -> Euler {
        let phase = t * self.speed / 4.0;
        Euler::new(
            phase.cos() / 8.0 * self.rotation_intensity,
            phase.sin() / 8.0 * self.rotation_intensity,
            phase.sin() / 20.0 * self.rotation_intensity,
        )
    }

    pub fn height(&self, t: f64) -> f64 {
        let raw = (t * self.speed / 4.0).sin() / 10.0;
        let (lo, hi) = self.range;
        let mapped = lo + (raw + 0.1) / 0.2 * (hi - lo);
        mapped * self.float_intensity
    }
}

/// Where the die sits in world space at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Mat3,
    pub translation: Vec3,
}

impl Transform {
    pub fn point(&self, local: Vec3) -> Vec3 {
        add(self.rotation.apply(local), self.translation)
    }

    pub fn direction(&self, local: Vec3) -> Vec3 {
        self.rotation.apply(local)
    }
}

pub fn die_transform(t: f64) -> Transform {
    let float_rotation = FLOAT.rotation(t).matrix();
    let shell_rotation = shell_orientation(t).matrix();
    Transform {
        rotation: float_rotation.mul(&shell_rotation),
        translation: [0.0, FLOAT.height(t), 0.0],
    }
}

/// One face of the die: its value, its group rotation and its pip pattern
/// in units of `PIP_SPREAD`.
struct FaceLayout {
    value: u8,
    rotation: Euler,
    pattern: &'static [(f64, f64)],
}

const FACES: [FaceLayout; 6] = [
    FaceLayout { value: 1, rotation: Euler::new(0.0, 0.0, 0.0), pattern: &[(0.0, 0.0)] },
    FaceLayout {
        value: 6,
        rotation: Euler::new(0.0, PI, 0.0),
        pattern: &[(-1.0, -1.0), (-1.0, 0.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 0.0), (1.0, 1.0)],
    },
    FaceLayout { value: 2, rotation: Euler::new(-FRAC_PI_2, 0.0, 0.0), pattern: &[(-1.0, -1.0), (1.0, 1.0)] },
    FaceLayout {
        value: 5,
        rotation: Euler::new(FRAC_PI_2, 0.0, 0.0),
        pattern: &[(-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (0.0, 0.0)],
    },
    FaceLayout {
        value: 3,
        rotation: Euler::new(0.0, FRAC_PI_2, 0.0),
        pattern: &[(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)],
    },
    FaceLayout {
        value: 4,
        rotation: Euler::new(0.0, -FRAC_PI_2, 0.0),
        pattern: &[(-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0)],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pip {
    pub face: u8,
    pub position: Vec3,
    pub normal: Vec3,
}

/// Every pip of a standard die in the die's local frame.
pub fn pip_layout() -> Vec<Pip> {
    FACES
        .iter()
        .flat_map(|face| {
            let rotation = face.rotation.matrix();
            let normal = rotation.apply([0.0, 0.0, 1.0]);
            face.pattern.iter().map(move |(x, y)| Pip {
                face: face.value,
                position: rotation.apply([x * PIP_SPREAD, y * PIP_SPREAD, PIP_DEPTH]),
                normal,
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub value: u8,
    pub normal: Vec3,
    pub corners: [Vec3; 4],
}

/// The six shell faces in the die's local frame, corners wound
/// counter-clockwise seen from outside.
pub fn shell_faces() -> Vec<Face> {
    let h = DIE_SIZE / 2.0;
    FACES
        .iter()
        .map(|face| {
            let rotation = face.rotation.matrix();
            Face {
                value: face.value,
                normal: rotation.apply([0.0, 0.0, 1.0]),
                corners: [
                    rotation.apply([-h, -h, h]),
                    rotation.apply([h, -h, h]),
                    rotation.apply([h, h, h]),
                    rotation.apply([-h, h, h]),
                ],
            }
        })
        .collect()
}

/// Perspective camera looking down -Z with no roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Point the camera is aimed at.
    pub target: Vec3,
    pub fov_y_degrees: f64,
    pub near: f64,
}

pub const CAMERA: Camera = Camera {
    position: [0.0, 1.0, 6.0],
    target: [0.0, 0.0, 0.0],
    fov_y_degrees: 45.0,
    near: 0.1,
};

const WORLD_UP: Vec3 = [0.0, 1.0, 0.0];

/// A point mapped to canvas pixels. `scale` is pixels per world unit at the
/// point's depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
    pub scale: f64,
}

impl Camera {
    fn focal(&self, height: f64) -> f64 {
        let half_fov = (self.fov_y_degrees.to_radians()) / 2.0;
        height / 2.0 / half_fov.tan()
    }

    /// World-to-view rotation. Rows are the camera's right, up and back
    /// axes, so view space looks down -Z toward `target`.
    pub fn look_at(&self) -> Mat3 {
        let forward = normalize(sub(self.target, self.position));
        let right = normalize(cross(forward, WORLD_UP));
        let up = cross(right, forward);
        Mat3([right, up, scale(forward, -1.0)])
    }

    /// Distance in front of the camera along its viewing axis.
    pub fn depth(&self, point: Vec3) -> f64 {
        -self.look_at().apply(sub(point, self.position))[2]
    }

    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let view = self.look_at().apply(sub(point, self.position));
        let depth = -view[2];
        if depth < self.near {
            return None;
        }
        let focal = self.focal(height);
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + view[0] * scale,
            y: height / 2.0 - view[1] * scale,
            depth,
            scale,
        })
    }

    /// Unit vector from `point` toward the camera.
    pub fn view_dir(&self, point: Vec3) -> Vec3 {
        normalize(sub(self.position, point))
    }

    /// Vertical over horizontal extent of a flat disc on the plane
    /// `y = ground` under the target, as seen from the camera.
    pub fn ground_squash(&self, ground: f64, width: f64, height: f64) -> f64 {
        let [x, _, z] = self.target;
        let near = self.project([x, ground, z + 1.0], width, height);
        let far = self.project([x, ground, z - 1.0], width, height);
        let left = self.project([x - 1.0, ground, z], width, height);
        let right = self.project([x + 1.0, ground, z], width, height);
        match (near, far, left, right) {
            (Some(near), Some(far), Some(left), Some(right)) if right.x > left.x => {
                ((near.y - far.y).abs() / (right.x - left.x)).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedFace {
    pub value: u8,
    pub corners: [Projected; 4],
    pub normal: Vec3,
    pub view_dir: Vec3,
    pub depth: f64,
    pub facing: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPip {
    pub face: u8,
    pub center: Projected,
    pub radius: f64,
    /// Whether the pip's face points toward the camera.
    pub facing: bool,
}

/// Everything the renderer needs for one frame, already sorted far-to-near.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    pub faces: Vec<ProjectedFace>,
    pub pips: Vec<ProjectedPip>,
    pub shadow_center: Option<Projected>,
    /// How flat the ground shadow looks from the camera, in `(0, 1]`.
    pub shadow_squash: f64,
    /// Vertical offset of the die from the float layer.
    pub lift: f64,
}

pub fn frame_geometry(t: f64, width: f64, height: f64) -> FrameGeometry {
    let transform = die_transform(t);
    let camera = CAMERA;

    let mut faces: Vec<ProjectedFace> = shell_faces()
        .into_iter()
        .filter_map(|face| {
            let world: Vec<Vec3> = face.corners.iter().map(|c| transform.point(*c)).collect();
            let center = scale(world.iter().fold([0.0; 3], |acc, c| add(acc, *c)), 0.25);
            let normal = transform.direction(face.normal);
            let view_dir = camera.view_dir(center);
            let corners = [
                camera.project(world[0], width, height)?,
                camera.project(world[1], width, height)?,
                camera.project(world[2], width, height)?,
                camera.project(world[3], width, height)?,
            ];
            Some(ProjectedFace {
                value: face.value,
                corners,
                normal,
                view_dir,
                depth: camera.depth(center),
                facing: dot(normal, view_dir) > 0.0,
            })
        })
        .collect();
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let mut pips: Vec<ProjectedPip> = pip_layout()
        .into_iter()
        .filter_map(|pip| {
            let world = transform.point(pip.position);
            let center = camera.project(world, width, height)?;
            let normal = transform.direction(pip.normal);
            Some(ProjectedPip {
                face: pip.face,
                radius: PIP_RADIUS * center.scale,
                facing: dot(normal, camera.view_dir(world)) > 0.0,
                center,
            })
        })
        .collect();
    pips.sort_by(|a, b| b.center.depth.total_cmp(&a.center.depth));

    FrameGeometry {
        faces,
        pips,
        shadow_center: camera.project([0.0, CONTACT_SHADOW.y, 0.0], width, height),
        shadow_squash: camera.ground_squash(CONTACT_SHADOW.y, width, height),
        lift: transform.translation[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn close_vec(a: Vec3, b: Vec3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
    }

    #[test]
    fn rest_orientation_at_time_zero() {
        let rest = shell_orientation(0.0);
        assert!(close(rest.x, REST_ORIENTATION.x));
        assert!(close(rest.y, REST_ORIENTATION.y));
        assert!(close(rest.z, REST_ORIENTATION.z));
    }

    #[test]
    fn vertical_spin_is_linear_and_unwrapped() {
        for step in 0..200 {
            let t = step as f64 * 0.5;
            assert!(close(shell_orientation(t).y, 0.25 * t));
        }
        // Past a full turn it keeps growing instead of wrapping.
        let t = 40.0;
        assert!(shell_orientation(t).y > 2.0 * PI);
        assert!(shell_orientation(t + 1.0).y > shell_orientation(t).y);
    }

    #[test]
    fn tilt_axes_stay_bounded() {
        for step in 0..1000 {
            let e = shell_orientation(step as f64 * 0.1);
            assert!(e.x.abs() <= 0.2 + EPS);
            assert!(e.z.abs() <= 0.1 + EPS);
        }
    }

    #[test]
    fn float_height_stays_in_range() {
        for step in 0..1000 {
            let y = FLOAT.height(step as f64 * 0.05);
            assert!(y >= -0.2 - EPS && y <= 0.2 + EPS, "height {} out of range", y);
        }
        assert!(close(FLOAT.height(0.0), 0.0));
    }

    #[test]
    fn pip_layout_is_a_standard_die() {
        let pips = pip_layout();
        assert_eq!(pips.len(), 21);
        for value in 1..=6u8 {
            let count = pips.iter().filter(|p| p.face == value).count();
            assert_eq!(count, value as usize, "face {}", value);
        }
    }

    #[test]
    fn pips_sit_near_their_face() {
        for pip in pip_layout() {
            // Depth along the face normal, spread within the face plane.
            assert!(close(dot(pip.position, pip.normal), PIP_DEPTH));
            assert!(pip.position.iter().all(|c| c.abs() <= PIP_DEPTH + EPS));
            assert!(PIP_DEPTH + PIP_RADIUS > DIE_SIZE / 2.0 - 0.1);
        }
    }

    #[test]
    fn opposite_faces_sum_to_seven() {
        let faces = shell_faces();
        for a in &faces {
            let opposite = faces
                .iter()
                .find(|b| close_vec(b.normal, scale(a.normal, -1.0)))
                .expect("every face has an opposite");
            assert_eq!(a.value + opposite.value, 7);
        }
    }

    #[test]
    fn face_normals_point_outward() {
        let faces = shell_faces();
        assert!(close_vec(faces[0].normal, [0.0, 0.0, 1.0]));
        let top = faces.iter().find(|f| f.value == 2).expect("top face");
        assert!(close_vec(top.normal, [0.0, 1.0, 0.0]));
        let right = faces.iter().find(|f| f.value == 3).expect("right face");
        assert!(close_vec(right.normal, [1.0, 0.0, 0.0]));
    }

    #[test]
    fn euler_applies_x_then_y_then_z() {
        let m = Euler::new(0.3, -0.7, 1.1).matrix();
        let expected = Mat3::rotation_x(0.3)
            .mul(&Mat3::rotation_y(-0.7))
            .mul(&Mat3::rotation_z(1.1));
        assert_eq!(m, expected);
        // Rotations keep lengths.
        let v = m.apply([1.0, 2.0, 3.0]);
        assert!(close(length(v), length([1.0, 2.0, 3.0])));
    }

    #[test]
    fn camera_aims_at_the_origin() {
        let p = CAMERA.project([0.0, 0.0, 0.0], 800.0, 600.0).expect("in front");
        assert!(close(p.x, 400.0));
        assert!(close(p.y, 300.0));
        assert!(close(p.depth, 37f64.sqrt()));
        assert!(CAMERA.project([0.0, 0.0, 10.0], 800.0, 600.0).is_none());
    }

    #[test]
    fn camera_pitches_down_toward_target() {
        // A point level with the camera sits above the image center.
        let level = CAMERA.project([0.0, 1.0, 0.0], 800.0, 600.0).expect("in front");
        assert!(level.y < 300.0);
        let view = CAMERA.look_at();
        let up = [view.0[1][0], view.0[1][1], view.0[1][2]];
        assert!(close(length(up), 1.0));
        // Up tilts back toward +Z when the camera looks down.
        let pitch = (-up[2]).atan2(up[1]);
        assert!(close(pitch, (1.0f64 / 6.0).atan()));
    }

    #[test]
    fn ground_shadow_is_flattened_by_the_view_angle() {
        let squash = CAMERA.ground_squash(CONTACT_SHADOW.y, 800.0, 600.0);
        assert!(squash > 0.2 && squash < 0.6, "squash {}", squash);
        let overhead = Camera {
            position: [0.0, 8.0, 0.001],
            ..CAMERA
        };
        assert!(overhead.ground_squash(CONTACT_SHADOW.y, 800.0, 600.0) > 0.9);
    }

    #[test]
    fn frame_shows_at_most_three_faces_sorted_far_to_near() {
        for step in 0..50 {
            let frame = frame_geometry(step as f64 * 0.37, 800.0, 600.0);
            assert_eq!(frame.faces.len(), 6);
            assert_eq!(frame.pips.len(), 21);
            let facing = frame.faces.iter().filter(|f| f.facing).count();
            assert!((1..=3).contains(&facing));
            assert!(frame.faces.windows(2).all(|w| w[0].depth >= w[1].depth));
            assert!(frame.pips.windows(2).all(|w| w[0].center.depth >= w[1].center.depth));
            assert!(frame.shadow_center.is_some());
        }
    }

    #[test]
    fn front_face_faces_camera_at_rest() {
        let frame = frame_geometry(0.0, 800.0, 600.0);
        let front = frame.faces.iter().find(|f| f.value == 1).expect("front face");
        assert!(front.facing);
        let back = frame.faces.iter().find(|f| f.value == 6).expect("back face");
        assert!(!back.facing);
    }
}
