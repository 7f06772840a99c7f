use web_sys::{
    js_sys::{Float32Array, Uint32Array},
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

use super::{BufferTarget, DrawMode, GlContext, ShaderStage};

impl GlContext for GL {
    type Program = WebGlProgram;
    type Shader = WebGlShader;
    type Buffer = WebGlBuffer;
    type UniformLocation = WebGlUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Option<WebGlShader> {
        GL::create_shader(self, stage as u32)
    }

    fn compile_shader(&self, shader: &WebGlShader, source: &str) -> bool {
        self.shader_source(shader, source);
        GL::compile_shader(self, shader);
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> String {
        self.get_shader_info_log(shader)
            .unwrap_or_else(|| "unknown error creating shader".to_string())
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) -> bool {
        GL::link_program(self, program);
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> String {
        self.get_program_info_log(program)
            .unwrap_or_else(|| "unknown error linking program".to_string())
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn use_program(&self, program: &WebGlProgram) {
        GL::use_program(self, Some(program));
    }

    fn uniform_mat4(&self, location: &WebGlUniformLocation, value: &[f32; 16]) {
        self.uniform_matrix4fv_with_f32_array(Some(location), false, value);
    }

    fn uniform_vec2(&self, location: &WebGlUniformLocation, value: [f32; 2]) {
        self.uniform2fv_with_f32_array(Some(location), &value);
    }

    fn uniform_vec4(&self, location: &WebGlUniformLocation, value: [f32; 4]) {
        self.uniform4fv_with_f32_array(Some(location), &value);
    }

    fn uniform_float(&self, location: &WebGlUniformLocation, value: f32) {
        self.uniform1f(Some(location), value);
    }

    fn enable_vertex_attrib(&self, index: u32) {
        self.enable_vertex_attrib_array(index);
    }

    fn disable_vertex_attrib(&self, index: u32) {
        self.disable_vertex_attrib_array(index);
    }

    fn vertex_attrib_f32(&self, index: u32, components: i32) {
        self.vertex_attrib_pointer_with_i32(index, components, GL::FLOAT, false, 0, 0);
    }

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &WebGlBuffer) {
        GL::bind_buffer(self, target as u32, Some(buffer));
    }

    fn buffer_f32(&self, target: BufferTarget, data: &[f32]) {
        let array = Float32Array::from(data);
        self.buffer_data_with_array_buffer_view(target as u32, &array, GL::STATIC_DRAW);
    }

    fn buffer_u32(&self, target: BufferTarget, data: &[u32]) {
        let array = Uint32Array::from(data);
        self.buffer_data_with_array_buffer_view(target as u32, &array, GL::STATIC_DRAW);
    }

    fn draw_elements_u32(&self, mode: DrawMode, count: i32) {
        self.draw_elements_with_i32(mode as u32, count, GL::UNSIGNED_INT, 0);
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear(&self) {
        GL::clear(self, GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        GL::viewport(self, x, y, width, height);
    }

    fn enable_depth_test(&self) {
        self.enable(GL::DEPTH_TEST);
    }
}
