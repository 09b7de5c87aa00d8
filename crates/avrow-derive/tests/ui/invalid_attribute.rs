use avrow_derive::Mapper;

#[derive(Mapper)]
#[mapper(rename_all = "not_a_real_case")]
struct Widget {
    name: String,
}

fn main() {}
