fn main() {
    homestead_frontend::boot();
}
