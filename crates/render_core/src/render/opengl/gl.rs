//! Fixed-function OpenGL entry points
//!
//! Only the handful of functions the backend calls are resolved, through the
//! context's `get_proc_address`. Every wrapper requires the context that loaded
//! the table to be current on the calling thread; [`super::GlfwBackend`] makes it
//! current at creation and never releases it.

use std::ffi::c_void;

use crate::render::window::WindowError;

pub const COLOR_BUFFER_BIT: u32 = 0x0000_4000;
pub const DEPTH_BUFFER_BIT: u32 = 0x0000_0100;
pub const POINTS: u32 = 0x0000;
pub const LINES: u32 = 0x0001;
pub const TRIANGLES: u32 = 0x0004;
pub const MODELVIEW: u32 = 0x1700;
pub const PROJECTION: u32 = 0x1701;

type ClearFn = unsafe extern "system" fn(mask: u32);
type ClearColorFn = unsafe extern "system" fn(red: f32, green: f32, blue: f32, alpha: f32);
type ViewportFn = unsafe extern "system" fn(x: i32, y: i32, width: i32, height: i32);
type MatrixModeFn = unsafe extern "system" fn(mode: u32);
type LoadIdentityFn = unsafe extern "system" fn();
type LoadMatrixdFn = unsafe extern "system" fn(m: *const f64);
type BeginFn = unsafe extern "system" fn(mode: u32);
type EndFn = unsafe extern "system" fn();
type Vertex3dFn = unsafe extern "system" fn(x: f64, y: f64, z: f64);

/// Resolved OpenGL function table
pub struct Gl {
    clear: ClearFn,
    clear_color: ClearColorFn,
    viewport: ViewportFn,
    matrix_mode: MatrixModeFn,
    load_identity: LoadIdentityFn,
    load_matrixd: LoadMatrixdFn,
    begin: BeginFn,
    end: EndFn,
    vertex3d: Vertex3dFn,
}

impl Gl {
    /// Resolve every entry point through `lookup`
    pub fn load(mut lookup: impl FnMut(&'static str) -> *const c_void) -> Result<Self, WindowError> {
        Ok(Self {
            clear: resolve(&mut lookup, "glClear")?,
            clear_color: resolve(&mut lookup, "glClearColor")?,
            viewport: resolve(&mut lookup, "glViewport")?,
            matrix_mode: resolve(&mut lookup, "glMatrixMode")?,
            load_identity: resolve(&mut lookup, "glLoadIdentity")?,
            load_matrixd: resolve(&mut lookup, "glLoadMatrixd")?,
            begin: resolve(&mut lookup, "glBegin")?,
            end: resolve(&mut lookup, "glEnd")?,
            vertex3d: resolve(&mut lookup, "glVertex3d")?,
        })
    }

    pub fn clear(&self, mask: u32) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.clear)(mask) }
    }

    pub fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.clear_color)(red, green, blue, alpha) }
    }

    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.viewport)(x, y, width, height) }
    }

    pub fn matrix_mode(&self, mode: u32) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.matrix_mode)(mode) }
    }

    pub fn load_identity(&self) {
        // SAFETY: loaded for the current context; no arguments.
        unsafe { (self.load_identity)() }
    }

    /// Replace the current matrix with 16 column-major values
    pub fn load_matrix(&self, m: &[f64; 16]) {
        // SAFETY: loaded for the current context; `m` points at 16 doubles,
        // which is exactly what glLoadMatrixd reads.
        unsafe { (self.load_matrixd)(m.as_ptr()) }
    }

    pub fn begin(&self, mode: u32) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.begin)(mode) }
    }

    pub fn end(&self) {
        // SAFETY: loaded for the current context; no arguments.
        unsafe { (self.end)() }
    }

    pub fn vertex(&self, x: f64, y: f64, z: f64) {
        // SAFETY: loaded for the current context; plain value arguments.
        unsafe { (self.vertex3d)(x, y, z) }
    }
}

fn resolve<F: Copy>(
    lookup: &mut impl FnMut(&'static str) -> *const c_void,
    name: &'static str,
) -> Result<F, WindowError> {
    let ptr = lookup(name);
    if ptr.is_null() {
        return Err(WindowError::MissingGlFunction(name));
    }
    debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*const c_void>());
    // SAFETY: `ptr` is a non-null address of the GL function `name`, and `F` is
    // the function pointer type matching that function's C signature.
    Ok(unsafe { std::mem::transmute_copy::<*const c_void, F>(&ptr) })
}
