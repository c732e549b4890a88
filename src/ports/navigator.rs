//! Navigator port - asks the host application to change views.

use crate::domain::presentation::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigator_is_object_safe() {
        fn _accepts_dyn(_navigator: &dyn Navigator) {}
    }
}
