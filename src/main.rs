fn main() {
    studyflow_frontend::run();
}
