use avrow_derive::Mapper;

#[derive(Mapper)]
#[mapper(rename_all = "snake", constructor = "build_a", constructor = "build_b")]
struct Widget {
    name: String,
}

impl Widget {
    fn build_a(name: String) -> Self {
        Self { name }
    }

    fn build_b(name: String) -> Self {
        Self { name }
    }
}

fn main() {}
