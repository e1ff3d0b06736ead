// @generated
pub mod todo {
    pub mod v1 {
        include!("todo/v1/todo.v1.rs");
    }
}
