mod greet;
