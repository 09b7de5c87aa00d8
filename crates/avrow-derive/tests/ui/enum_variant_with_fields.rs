use avrow_derive::AvEnum;

#[derive(AvEnum, Clone, Copy)]
enum Shape {
    Circle(f64),
    Square,
}

fn main() {}
