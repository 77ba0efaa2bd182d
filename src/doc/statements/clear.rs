/*!
# `CLEAR`

## Purpose
Erase the program and all variables.

## Remarks
Afterwards `LIST` shows nothing and every variable is undefined.

## Example
```text
LET A = 1
CLEAR
PRINT A
VARIABLE NOT DEFINED
```

*/
